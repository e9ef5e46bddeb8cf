//! Prompt templates for the chat assistant and the meal-plan generator.
//!
//! The meal-plan prompt enforces a JSON-only output contract; when the first
//! response fails to parse, the caller appends [`JSON_ONLY_REMINDER`] and
//! retries once.

use std::fmt::Display;

use crate::planner::PlanRequest;

/// System prompt for the health chat assistant.
pub const CHAT_SYSTEM_PROMPT: &str = r#"You are FoodMeds Assistant, a knowledgeable and friendly health companion.

GUIDELINES:
1. Format: use bold for key terms and bullet points for lists. Keep answers easy to read.
2. Tone: friendly, simple, clear, and encouraging.
3. Reference data: when a "Reference Information" block is provided, treat it as supporting material and answer in your own words; clean up any raw formatting before presenting it.
4. Scope: food, nutrition, diseases, diets, health conditions, and general wellness. Politely decline anything else.
5. Uncertainty: if unsure, say so and suggest consulting a healthcare professional."#;

/// Appended to the meal-plan prompt on the retry pass.
pub const JSON_ONLY_REMINDER: &str = "IMPORTANT: Produce ONLY valid JSON (no text).";

/// Few-shot examples teaching condition-specific plans: (input condition,
/// expected JSON output).
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "Diabetes",
        r#"{"disease":"Diabetes","summary":"Prioritize low-glycemic carbs, lean protein and high fiber to reduce blood sugar spikes.","recommendedDiet":"Low GI, high fiber","nutrients":{"calories":1400,"protein":"80 g","fat":"45 g","carbohydrates":"130 g","fiber":"28 g"},"mealPlan":{"breakfast":[{"title":"Steel-cut oats with cinnamon and apple","description":"Low GI oats, fiber","recipeLink":""},{"title":"Boiled egg","description":"Protein to blunt glucose rise","recipeLink":""}],"lunch":[{"title":"Grilled chicken salad with quinoa","description":"Lean protein and fiber","recipeLink":""},{"title":"Steamed vegetables","description":"Low GI sides","recipeLink":""}],"dinner":[{"title":"Baked white fish and cauliflower mash","description":"Low-carb dinner","recipeLink":""},{"title":"Mixed salad","description":"Fiber and volume","recipeLink":""}]},"motivation":"Consistent portions and fiber-rich foods help keep glucose stable."}"#,
    ),
    (
        "Hypertension",
        r#"{"disease":"Hypertension","summary":"Follow DASH-style eating: low sodium, more fruits and vegetables, lean protein and whole grains.","recommendedDiet":"DASH (low sodium)","nutrients":{"calories":1500,"protein":"85 g","fat":"50 g","carbohydrates":"140 g","sodium_mg":1200},"mealPlan":{"breakfast":[{"title":"Oatmeal with berries","description":"Potassium-rich, low sodium","recipeLink":""},{"title":"Low-fat yogurt","description":"Protein and calcium","recipeLink":""}],"lunch":[{"title":"Lentil soup (low salt) with salad","description":"Plant protein and vegetables","recipeLink":""},{"title":"Whole grain roll","description":"Moderate carb","recipeLink":""}],"dinner":[{"title":"Roasted salmon with steamed greens","description":"Omega-3s, low salt","recipeLink":""},{"title":"Quinoa (small)","description":"Whole grain side","recipeLink":""}]},"motivation":"Reduce salt, increase plants, protect your heart."}"#,
    ),
];

/// Build the chat prompt, embedding retrieved catalog context when present.
pub fn make_chat_prompt(message: &str, context: Option<&str>) -> String {
    match context {
        Some(context) => format!(
            r#"Here is some Reference Information (it may be raw data, format it nicely in your answer):
=== START REFERENCE DATA ===
{context}
=== END REFERENCE DATA ===

USER QUESTION: {message}

Answer the question using the reference data where it helps; when it does not cover the question, rely on your general knowledge and say you are doing so."#
        ),
        None => message.to_string(),
    }
}

/// Build the meal-plan prompt: demographics, output rules, and few-shot
/// examples.
pub fn make_plan_prompt(request: &PlanRequest) -> String {
    let demographics = match &request.profile {
        Some(profile) => format!(
            "Age: {}, Sex: {}, Height(cm): {}, Weight(kg): {}",
            field(&profile.age),
            field(&profile.sex),
            field(&profile.height_cm),
            field(&profile.weight_kg),
        ),
        None => "No user demographics provided.".to_string(),
    };

    let mut prompt = format!(
        r#"You are a licensed clinical nutritionist. Use the patient demographics and health condition to produce a personalized meal plan.

Patient info:
{demographics}
Activity level: {activity}
Health condition: {disease}

RULES to follow every time:
1) Output ONLY valid JSON (no surrounding explanation). The JSON MUST include keys:
   "disease", "summary", "recommendedDiet", "nutrients", "mealPlan", "motivation".
2) mealPlan must include "breakfast", "lunch", "dinner" each as arrays of objects with keys "title", "description", "recipeLink".
3) Be disease-specific: tailor foods, prohibited items, and swaps relevant to the condition.
4) Provide at least 2 distinct items per meal, with a suggestion or swap in the description where helpful.
5) Provide realistic numeric estimates in "nutrients" (calories, protein, fat, carbs). Optionally include fiber and sodium where relevant.
6) Keep strings concise. No extra text, no markdown.
7) Give each condition its own distinct plan, and the same plan every time the same condition is requested.
"#,
        activity = request.activity_status.as_deref().unwrap_or("not provided"),
        disease = request.disease,
    );

    prompt.push_str("\nFollow these EXAMPLES and then produce the JSON only:\n");
    for (i, (input, output)) in FEW_SHOT_EXAMPLES.iter().enumerate() {
        prompt.push_str(&format!(
            "\nEXAMPLE {}:\nInput: {}\nOutput (JSON only):\n{}\n",
            i + 1,
            input,
            output
        ));
    }
    prompt.push_str("\nProduce the JSON now.\n");

    prompt
}

fn field<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{parse_plan_output, UserProfile};

    #[test]
    fn test_chat_prompt_without_context() {
        assert_eq!(make_chat_prompt("foods for anemia", None), "foods for anemia");
    }

    #[test]
    fn test_chat_prompt_embeds_context() {
        let prompt = make_chat_prompt("foods for anemia", Some("Trusted local knowledge:\n1. Anemia"));
        assert!(prompt.contains("=== START REFERENCE DATA ==="));
        assert!(prompt.contains("1. Anemia"));
        assert!(prompt.contains("USER QUESTION: foods for anemia"));
    }

    #[test]
    fn test_plan_prompt_contains_condition_and_rules() {
        let prompt = make_plan_prompt(&PlanRequest::new("Asthma"));
        assert!(prompt.contains("Health condition: Asthma"));
        assert!(prompt.contains("No user demographics provided."));
        assert!(prompt.contains("Activity level: not provided"));
        assert!(prompt.contains(r#""disease", "summary", "recommendedDiet""#));
        assert!(prompt.contains("EXAMPLE 1:"));
        assert!(prompt.contains("EXAMPLE 2:"));
        assert!(prompt.trim_end().ends_with("Produce the JSON now."));
    }

    #[test]
    fn test_plan_prompt_renders_demographics() {
        let mut request = PlanRequest::new("Diabetes");
        request.activity_status = Some("Very Active".into());
        request.profile = Some(UserProfile {
            age: Some(42),
            sex: Some("female".into()),
            height_cm: Some(170.0),
            weight_kg: None,
        });

        let prompt = make_plan_prompt(&request);
        assert!(prompt.contains("Age: 42, Sex: female, Height(cm): 170, Weight(kg): unknown"));
        assert!(prompt.contains("Activity level: Very Active"));
    }

    #[test]
    fn test_few_shot_examples_honor_the_contract() {
        // The examples must themselves parse under the typed output model
        for (input, output) in FEW_SHOT_EXAMPLES {
            let plan = parse_plan_output(output).unwrap();
            assert_eq!(&plan.disease, input);
            assert!(plan.meal_plan.breakfast.len() >= 2);
        }
    }
}
