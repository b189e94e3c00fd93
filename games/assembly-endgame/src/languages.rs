use guess_engine::Language;

/// Escalation chips, eliminated left to right. Assembly is the last one
/// standing: running out of guesses leaves only Assembly.
pub fn languages() -> Vec<Language> {
    vec![
        Language::new("HTML", "#E2680F", "#F9F4DA"),
        Language::new("CSS", "#328AF1", "#F9F4DA"),
        Language::new("JavaScript", "#F4EB13", "#1E1E1E"),
        Language::new("React", "#2ED3E9", "#1E1E1E"),
        Language::new("TypeScript", "#298EC6", "#F9F4DA"),
        Language::new("Node.js", "#599137", "#F9F4DA"),
        Language::new("Python", "#FFD742", "#1E1E1E"),
        Language::new("Ruby", "#D02B2B", "#F9F4DA"),
        Language::new("Assembly", "#2D519F", "#F9F4DA"),
    ]
}
