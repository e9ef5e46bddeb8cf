//! Domain triage for the chat assistant.
//!
//! Incoming messages are gated before any model call: greetings get a canned
//! welcome, off-topic messages a polite refusal, and only in-domain messages
//! are forwarded to a completion backend.

/// Keywords that place a message in the food/health/nutrition domain.
const ALLOWED_KEYWORDS: &[&str] = &[
    // Food & nutrition
    "food", "nutrition", "diet", "calorie", "protein", "fat", "carb", "vitamin", "mineral",
    "sugar", "salt", "fiber", "keto", "vegan", "vegetarian", "gluten", "dairy", "meat",
    "fruit", "vegetable", "grain", "legume", "nut", "seed", "oil", "water", "beverage",
    "breakfast", "lunch", "dinner", "snack", "meal", "milk", "yogurt", "cheese", "egg",
    "fish", "chicken", "beef", "pork", "tofu", "tempeh", "chocolate", "coffee", "tea",
    // Health & disease
    "health", "disease", "illness", "sickness", "condition", "symptom", "pain", "cure",
    "diabetes", "cholesterol", "hypertension", "anemia", "fever", "cough", "cold",
    "stomach", "ibs", "digest", "gut", "heart", "liver", "kidney", "skin", "hair",
    "thyroid", "allergy", "inflammation", "infection", "immune", "cancer", "obesity",
    "arthritis", "depression", "anxiety", "migraine", "weight", "sleep apnea",
    "blood pressure", "sugar levels",
    // Nutrients & meds
    "iron", "calcium", "magnesium", "zinc", "folate", "b12", "supplement", "medicine",
    "pill", "tablet", "antibiotic", "vitamin d", "omega-3", "probiotic",
    // Lifestyle & actions
    "workout", "gym", "exercise", "loss", "gain", "recipe", "cook", "kitchen", "height",
    "sleep", "stress", "mental", "wellness", "bmi", "body mass index", "metabolism",
    // General inquiry words, so follow-up questions stay in scope
    "type", "kind", "what", "how", "why", "when", "explain", "list", "more", "detail",
    "help", "example", "other", "different", "any", "variety", "high", "low", "best",
    "top", "rich", "source",
];

/// Greeting openers that short-circuit to the welcome reply.
const GREETINGS: &[&str] = &[
    "hi", "hello", "hey", "greetings", "good morning", "good afternoon", "good evening",
    "how are you", "what's up", "wassup", "yo", "hiya", "hey there", "hi there", "g'day",
    "howdy", "bonjour", "hola", "ciao", "namaste",
];

/// Messages at or above this length are never treated as bare greetings.
const GREETING_MAX_LEN: usize = 35;

/// Canned welcome for greeting-only messages.
pub const GREETING_REPLY: &str = "Hey there! I'm your FoodMeds Assistant. I can help with \
    food sources, diseases, diet tips, and general health info. What do you need to know today?";

/// Canned refusal for messages outside the food/health domain.
pub const OUT_OF_SCOPE_REPLY: &str = "I'm not sure about that one! I specialize in food, \
    health, and nutrition. Try asking about a specific condition, diet, disease, or food item.";

/// How an incoming chat message should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTriage {
    /// Short greeting - answer with [`GREETING_REPLY`], skip the backend
    Greeting,
    /// Off-topic - answer with [`OUT_OF_SCOPE_REPLY`], skip the backend
    OutOfScope,
    /// Forward to the completion backend
    InDomain,
}

/// Classify a message before any model call.
pub fn triage(message: &str) -> ChatTriage {
    if is_greeting(message) {
        ChatTriage::Greeting
    } else if is_in_domain(message) {
        ChatTriage::InDomain
    } else {
        ChatTriage::OutOfScope
    }
}

/// Whether the message mentions anything in the food/health domain.
pub fn is_in_domain(message: &str) -> bool {
    let t = message.to_lowercase();
    ALLOWED_KEYWORDS.iter().any(|k| t.contains(k))
}

/// Whether the message is a bare greeting: short, not a question, and
/// containing a known greeting opener.
pub fn is_greeting(message: &str) -> bool {
    let t = message.trim().to_lowercase();
    t.len() < GREETING_MAX_LEN && !t.contains('?') && GREETINGS.iter().any(|g| t.contains(g))
}

/// Canned answer used when no completion backend is configured.
pub fn offline_reply(message: &str) -> Option<&'static str> {
    let t = message.to_lowercase();
    if t.contains("iron") || t.contains("anemia") {
        return Some("Foods rich in iron: lentils, spinach, chickpeas, red meat. (I am not a doctor!)");
    }
    if t.contains("vitamin d") {
        return Some("Vitamin D sources: sunlight, salmon, tuna, fortified milk. (I am not a doctor!)");
    }
    None
}
