//! Canned replies for the landing page chat assistant.
//!
//! Replies come from an ordered rule table. The visitor's text is lowercased
//! and split into words; each rule is tried in table order and the first rule
//! with a keyword appearing as whole words in the text wins, so "rate" does
//! not match "separate". Order is part of the contract: a question
//! mentioning both "price" and "biometric" is answered as a pricing question.

use serde::Serialize;

/// One entry in the reply table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRule {
    /// Stable identifier reported back to the widget.
    pub topic: &'static str,
    /// Lowercase words or phrases that select this rule.
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// A reply chosen for a visitor message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub topic: &'static str,
    pub reply: &'static str,
}

/// Reply for blank input.
pub const EMPTY_REPLY: ChatReply = ChatReply {
    topic: "empty",
    reply: "Hi! Ask me about CCTV pricing, installation time, AMC plans, biometric attendance or the areas we cover.",
};

/// Reply when no rule matches.
pub const FALLBACK_REPLY: ChatReply = ChatReply {
    topic: "fallback",
    reply: "I'm not sure about that one. Leave your details in the form or WhatsApp us and our team will get back to you.",
};

/// The reply table, in priority order.
pub const CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        topic: "pricing",
        keywords: &[
            "price", "prices", "pricing", "cost", "costs", "rate", "rates", "quote",
            "quotation", "charges", "budget", "how much",
        ],
        reply: "Pricing depends on the number of cameras, cabling and storage. We give a transparent quote after a free site visit anywhere in Bangalore.",
    },
    ChatRule {
        topic: "installation_time",
        keywords: &["how long", "same day", "install time", "duration", "when can"],
        reply: "A standard 4 to 8 camera setup is usually installed the same day after confirmation. Apartments and offices may take 1 to 2 days.",
    },
    ChatRule {
        topic: "amc",
        keywords: &["amc", "maintenance", "repair", "service plan", "not working", "servicing"],
        reply: "We offer CCTV service and Annual Maintenance Contracts (AMC) covering periodic health checks, cleaning and priority repairs.",
    },
    ChatRule {
        topic: "biometric",
        keywords: &[
            "biometric", "attendance", "fingerprint", "access control", "face recognition",
        ],
        reply: "We install biometric attendance and access control systems with visitor logs for offices, shops and apartments.",
    },
    ChatRule {
        topic: "mobile_view",
        keywords: &["mobile", "phone app", "remote", "live view", "playback"],
        reply: "Yes. We configure mobile viewing apps so you can watch live, play back recordings and receive alerts from anywhere.",
    },
    ChatRule {
        topic: "warranty",
        keywords: &["warranty", "guarantee"],
        reply: "Installation workmanship carries a 1-year service warranty, plus the manufacturer warranty on cameras, NVRs and DVRs.",
    },
    ChatRule {
        topic: "service_area",
        keywords: &[
            "area", "areas", "location", "bangalore", "bengaluru", "whitefield",
            "electronic city", "do you cover",
        ],
        reply: "We cover all of Bangalore: North, South, East and West, including Whitefield, Electronic City, HSR Layout, Hebbal and more.",
    },
    ChatRule {
        topic: "contact",
        keywords: &["contact", "call", "whatsapp", "number", "talk to"],
        reply: "You can call or WhatsApp us anytime using the buttons on this page, or leave your details in the form and we will call you back.",
    },
    ChatRule {
        topic: "greeting",
        keywords: &["hello", "hi", "hey", "namaste", "good morning", "good evening"],
        reply: "Hello! How can we help secure your home or business today?",
    },
];

/// Pick the reply for a visitor message using [`CHAT_RULES`].
pub fn reply_for(message: &str) -> ChatReply {
    reply_with(CHAT_RULES, message)
}

/// Pick the reply for a visitor message from an arbitrary rule table.
pub fn reply_with(rules: &[ChatRule], message: &str) -> ChatReply {
    let text = message.to_lowercase();
    let words = words(&text);
    if words.is_empty() {
        return EMPTY_REPLY;
    }

    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| contains_phrase(&words, k)))
        .map_or(FALLBACK_REPLY, |rule| ChatReply {
            topic: rule.topic,
            reply: rule.reply,
        })
}

fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whether `phrase` occurs in `words` as a run of whole words.
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let needle = self::words(phrase);
    !needle.is_empty() && words.windows(needle.len()).any(|run| run == needle.as_slice())
}
