//! Meal-plan generation glue.
//!
//! Typed output model for the JSON-only contract, robust parsing that
//! recovers JSON wrapped in prose, and a driver that retries once with a
//! stronger JSON-only instruction before giving up. The actual model
//! provider is abstracted behind [`CompletionBackend`].

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::prompts::{make_plan_prompt, JSON_ONLY_REMINDER};

/// How much raw model output to keep in a [`PlanError::Unparseable`] error.
const RAW_SNIPPET_LEN: usize = 3000;

/// A title repeated more than this often across meals suggests a generic plan.
const REPEAT_TITLE_LIMIT: usize = 2;

/// Planner errors.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Model output was not valid JSON after retry")]
    Unparseable { raw: String },

    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;

/// Request for a personalized meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Health condition to plan for
    pub disease: String,
    /// Self-reported activity level (e.g. "Very Active")
    pub activity_status: Option<String>,
    /// Demographics used to personalize portions
    pub profile: Option<UserProfile>,
}

impl PlanRequest {
    /// Create a request with just a condition.
    pub fn new(disease: impl Into<String>) -> Self {
        Self {
            disease: disease.into(),
            activity_status: None,
            profile: None,
        }
    }
}

/// Optional user demographics forwarded into the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

/// A generated meal plan, as returned by the model.
///
/// `summary`, `nutrients`, and `mealPlan` are required by the output
/// contract; the remaining keys degrade to empty strings when a model
/// omits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(default)]
    pub disease: String,
    pub summary: String,
    #[serde(default)]
    pub recommended_diet: String,
    pub nutrients: Nutrients,
    pub meal_plan: Meals,
    #[serde(default)]
    pub motivation: String,
}

/// The three daily meals, each a list of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meals {
    #[serde(default)]
    pub breakfast: Vec<MealItem>,
    #[serde(default)]
    pub lunch: Vec<MealItem>,
    #[serde(default)]
    pub dinner: Vec<MealItem>,
}

impl Meals {
    /// Iterate every item across all meals.
    pub fn iter(&self) -> impl Iterator<Item = &MealItem> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
    }
}

/// One dish in a meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recipe_link: String,
}

/// Nutrient estimates. Models add context-dependent keys (fiber, sodium_mg)
/// beyond the core four; those are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrients {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub carbohydrates: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parse model output into a meal plan.
///
/// Tries the whole response first, then falls back to the outermost brace
/// span - models often wrap the JSON in prose.
pub fn parse_plan_output(text: &str) -> PlanResult<MealPlan> {
    match serde_json::from_str(text) {
        Ok(plan) => Ok(plan),
        Err(whole_err) => match (text.find('{'), text.rfind('}')) {
            (Some(start), Some(end)) if start < end => {
                Ok(serde_json::from_str(&text[start..=end])?)
            }
            _ => Err(PlanError::InvalidFormat(format!(
                "no JSON object found in response: {whole_err}"
            ))),
        },
    }
}

/// Sampling parameters for one completion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CompletionParams {
    /// First-attempt settings.
    pub fn first_pass() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 1500,
        }
    }

    /// Retry settings: hotter sampling, used together with
    /// [`JSON_ONLY_REMINDER`].
    pub fn retry_pass() -> Self {
        Self {
            temperature: 0.95,
            max_tokens: 1500,
        }
    }
}

/// An opaque text-completion provider.
///
/// The concrete integration (HTTP client, API keys, model choice) lives
/// outside this crate; anything that can turn a prompt into text plugs in
/// here.
pub trait CompletionBackend {
    fn complete(&self, prompt: &str, params: &CompletionParams) -> anyhow::Result<String>;
}

/// Drives prompt construction, the backend call, and JSON recovery.
pub struct PlanGenerator<B> {
    backend: B,
}

impl<B: CompletionBackend> PlanGenerator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Generate a meal plan for the request, retrying once with a stronger
    /// JSON-only instruction when the first response is not parseable.
    pub fn generate(&self, request: &PlanRequest) -> PlanResult<MealPlan> {
        let prompt = make_plan_prompt(request);

        let first = self
            .backend
            .complete(&prompt, &CompletionParams::first_pass())?;
        if let Ok(plan) = parse_plan_output(&first) {
            return Ok(finish(plan));
        }

        warn!(
            disease = %request.disease,
            "first response was not parseable JSON, retrying with JSON-only emphasis"
        );
        let retry_prompt = format!("{prompt}\n\n{JSON_ONLY_REMINDER}");
        let second = self
            .backend
            .complete(&retry_prompt, &CompletionParams::retry_pass())?;
        match parse_plan_output(&second) {
            Ok(plan) => Ok(finish(plan)),
            Err(_) => Err(PlanError::Unparseable {
                raw: second.chars().take(RAW_SNIPPET_LEN).collect(),
            }),
        }
    }
}

/// Surface the repeated-title heuristic, then pass the plan through.
fn finish(plan: MealPlan) -> MealPlan {
    let repeats = repeated_titles(&plan);
    if repeats.len() > 3 {
        warn!(
            count = repeats.len(),
            "many repeated items across meals, output may be too generic"
        );
    }
    plan
}

/// Titles appearing more than [`REPEAT_TITLE_LIMIT`] times across all meals.
fn repeated_titles(plan: &MealPlan) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in plan.meal_plan.iter() {
        *counts.entry(item.title.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > REPEAT_TITLE_LIMIT)
        .collect()
}

/// Scripted backend for tests: pops canned responses in order and records
/// the prompts it was given.
pub struct MockBackend {
    responses: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().map(String::from).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl CompletionBackend for MockBackend {
    fn complete(&self, prompt: &str, _params: &CompletionParams) -> anyhow::Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("mock backend ran out of responses"))
    }
}
