use crate::data::model::CourseDataset;

// ---------------------------------------------------------------------------
// Rule-based chat widget
// ---------------------------------------------------------------------------

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: String,
}

/// Transcript plus the pending input line.
#[derive(Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Whether the floating chat window is shown.
    pub open: bool,
}

impl ChatState {
    /// Submit the pending input line against the loaded collection.  Blank
    /// input is ignored.
    pub fn submit(&mut self, dataset: &CourseDataset) {
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return;
        }
        self.input.clear();

        let reply = answer(dataset, &question);
        self.messages.push(ChatMessage {
            from_user: true,
            text: question,
        });
        self.messages.push(ChatMessage {
            from_user: false,
            text: reply,
        });
    }
}

pub const FALLBACK: &str = "Sorry, I could not find any matching info. \
    Try 'Happiness Program in Mysuru' or 'Happiness Program at 560068'.";

/// Answer a free-text question from the canned course data.
///
/// Substring matching only, no NLP: the first course whose district
/// (case-insensitive) or pin code (as its decimal digits) occurs in the
/// question wins.  Anything else gets the fallback.
pub fn answer(dataset: &CourseDataset, question: &str) -> String {
    let q = question.to_lowercase();

    for course in &dataset.courses {
        if q.contains(&course.district.to_lowercase()) {
            return format!(
                "Yes, we have \"{}\" in {}. Contact: {}. Register: {}",
                course.course_type, course.district, course.contact, course.register_link
            );
        }
        if q.contains(&course.pin_code.to_string()) {
            return format!(
                "Yes, we have \"{}\" at {}. Contact: {}. Register: {}",
                course.course_type, course.pin_code, course.contact, course.register_link
            );
        }
    }

    FALLBACK.to_string()
}
