/// Builds the prompt sent to the model runner for a symptom description.
///
/// The symptom text is interpolated verbatim; empty input still yields a prompt.
pub fn build(symptoms: &str) -> String {
    format!(
        "You are very useful assistant. A user described their symptoms as: '{symptoms}'.\n\n\
         Provide a plain-language explanation of possible causes, but remind them to consult a doctor."
    )
}

#[cfg(test)]
mod tests {
    use super::build;

    #[test]
    fn interpolates_symptoms() {
        let prompt = build("headache and fever");
        assert!(prompt.contains("symptoms as: 'headache and fever'.\n\n"));
        assert!(prompt.ends_with("remind them to consult a doctor."));
    }

    #[test]
    fn empty_symptoms_still_build_a_prompt() {
        let prompt = build("");
        assert!(prompt.contains("symptoms as: ''."));
    }
}
