/// Deterministic prompt templates for the completion service
///
/// Inputs arrive already validated; no further escaping happens here. The
/// question and weather text are embedded verbatim, which means a caller can
/// steer the prompt — an inherited limitation, kept so generated output stays
/// comparable with the deployed behavior.
use crate::utils::s_at_or;
use serde_json::Value;

/// Render the rover Q&A prompt from a caller-supplied photo object and a
/// verbatim question.
pub fn rover_qa_prompt(photo: &Value, question: &str) -> String {
    let rover = s_at_or(photo, &["rover", "name"], "Unknown");
    let camera = s_at_or(photo, &["camera", "full_name"], "Unknown");
    let earth_date = s_at_or(photo, &["earth_date"], "Unknown");
    let sol = s_at_or(photo, &["sol"], "Unknown");
    let img_src = s_at_or(photo, &["img_src"], "Unknown");

    format!(
        "You are an expert on Mars rover missions. A user is looking at a Mars rover photo \
         with the following details:\n\
         Rover: {rover}\n\
         Camera: {camera}\n\
         Earth date: {earth_date}\n\
         Sol: {sol}\n\
         Image URL: {img_src}\n\n\
         Answer the user's question about this photo concisely.\n\
         Question: {question}"
    )
}

/// Render the weather summary prompt around the pretty-printed weather
/// record.
pub fn weather_summary_prompt(weather: &Value) -> String {
    let pretty = serde_json::to_string_pretty(weather)
        .unwrap_or_else(|_| weather.to_string());

    format!(
        "You are a planetary scientist. Below is a day of Mars weather telemetry from the \
         InSight lander as JSON. Write a short summary for a general audience covering the \
         temperature, the atmospheric pressure and the wind.\n\n{pretty}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn qa_prompt_embeds_photo_fields_and_question() {
        let photo = json!({
            "rover": {"name": "Curiosity"},
            "camera": {"full_name": "Mast Camera"},
            "earth_date": "2020-01-01",
            "sol": 1000,
            "img_src": "http://mars.nasa.gov/photo.jpg"
        });
        let prompt = rover_qa_prompt(&photo, "What is in this photo?");
        assert!(prompt.contains("Rover: Curiosity"));
        assert!(prompt.contains("Camera: Mast Camera"));
        assert!(prompt.contains("Earth date: 2020-01-01"));
        assert!(prompt.contains("Sol: 1000"));
        assert!(prompt.contains("Image URL: http://mars.nasa.gov/photo.jpg"));
        assert!(prompt.ends_with("Question: What is in this photo?"));
    }

    #[test]
    fn qa_prompt_defaults_missing_fields() {
        let photo = json!({"img_src": "http://mars.nasa.gov/p.jpg"});
        let prompt = rover_qa_prompt(&photo, "q");
        assert!(prompt.contains("Rover: Unknown"));
        assert!(prompt.contains("Camera: Unknown"));
    }

    #[test]
    fn qa_prompt_is_deterministic() {
        let photo = json!({"sol": 55, "img_src": "http://x"});
        assert_eq!(rover_qa_prompt(&photo, "q"), rover_qa_prompt(&photo, "q"));
    }

    #[test]
    fn weather_prompt_embeds_pretty_record() {
        let weather = json!({
            "AT": {"av": -60.0},
            "PRE": {"av": 750.0},
            "WD": {"1": {"compass_point": "N", "compass_degrees": 0.0, "ct": 10}}
        });
        let prompt = weather_summary_prompt(&weather);
        assert!(prompt.contains("general audience"));
        assert!(prompt.contains("\"av\": -60.0"));
        assert!(prompt.contains("\"compass_point\": \"N\""));
    }
}
