//! Keyword lookups that derive configuration values from free-text answers.
//!
//! Every table is an ordered list of `(keyword, suggestion)` pairs. Lookups
//! lower-case their input and return the suggestion of the first pair whose
//! keyword is a substring of it, so table order is a priority ranking.

/// Class suffix table, in priority order.
pub const CLASS_SUFFIXES: &[(&str, &str)] = &[
    ("sight", "Eye"),
    ("vision", "Eye"),
    ("image", "Eye"),
    ("song", "Ear"),
    ("audio", "Ear"),
    ("sound", "Ear"),
    ("script", "Reader"),
    ("document", "Reader"),
    ("text", "Reader"),
    ("lab", "Analyst"),
    ("data", "Analyst"),
    ("stats", "Analyst"),
    ("code", "Coder"),
    ("dev", "Coder"),
    ("program", "Coder"),
];

/// Suffix used when neither the name nor the category matches.
pub const DEFAULT_CLASS_SUFFIX: &str = "Processor";

/// File extension table, in priority order.
pub const FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("image", "jpg"),
    ("audio", "wav"),
    ("video", "mp4"),
    ("document", "pdf"),
    ("text", "txt"),
    ("code", "py"),
    ("data", "csv"),
];

/// Extension used when the category matches nothing.
pub const DEFAULT_FILE_EXTENSION: &str = "txt";

/// Dependencies every generated app needs.
pub const BASE_REQUIREMENTS: &[&str] = &["gradio>=5.42.0", "pandas", "requests", "Pillow", "pathlib"];

/// Extra dependencies per category keyword. Only the first match applies.
const CATEGORY_REQUIREMENTS: &[(&str, &[&str])] = &[
    ("audio", &["librosa", "soundfile", "pydub"]),
    ("image", &["opencv-python"]),
    ("document", &["PyPDF2", "python-docx"]),
];

/// Return the suggestion of the first table entry whose keyword occurs in `input`.
fn first_match(table: &[(&'static str, &'static str)], input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| input.contains(keyword))
        .map(|(_, suggestion)| *suggestion)
}

/// Suggest a value by scanning `name` first, then `category`, then falling back.
///
/// A match anywhere in `name` beats any match in `category`, regardless of
/// where the keywords sit in the table.
pub fn suggest_with(
    table: &[(&'static str, &'static str)],
    name: &str,
    category: &str,
    fallback: &'static str,
) -> &'static str {
    first_match(table, name)
        .or_else(|| first_match(table, category))
        .unwrap_or(fallback)
}

/// Suggest a class suffix (e.g. `Eye`, `Reader`) for a dragon name and data category.
pub fn suggest_class_suffix(name: &str, category: &str) -> &'static str {
    suggest_with(CLASS_SUFFIXES, name, category, DEFAULT_CLASS_SUFFIX)
}

/// Suggest a sample file extension for a data category.
pub fn suggest_file_extension(category: &str) -> &'static str {
    first_match(FILE_EXTENSIONS, category).unwrap_or(DEFAULT_FILE_EXTENSION)
}

/// Gradio input component for a data category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputComponent {
    /// Component class name, e.g. `Image`.
    pub component: &'static str,
    /// Value passed as the component's `type=` argument.
    pub kind: &'static str,
    /// Extra constructor arguments, possibly empty.
    pub params: &'static str,
}

impl InputComponent {
    const FILE: InputComponent = InputComponent {
        component: "File",
        kind: "file",
        params: "",
    };
}

/// Pick the input component for a category.
///
/// Unlike the keyword tables this is an exact lookup on the lower-cased category.
pub fn input_component(category: &str) -> InputComponent {
    match category.to_lowercase().as_str() {
        "image" => InputComponent {
            component: "Image",
            kind: "pil",
            params: "height=300",
        },
        "audio" => InputComponent {
            component: "Audio",
            kind: "filepath",
            params: "show_label=True",
        },
        "text" => InputComponent {
            component: "Textbox",
            kind: "text",
            params: "lines=5",
        },
        _ => InputComponent::FILE,
    }
}

/// Python dependencies for a generated app in the given category.
pub fn requirements(category: &str) -> Vec<&'static str> {
    let category = category.to_lowercase();
    let mut deps = BASE_REQUIREMENTS.to_vec();
    if let Some((_, extra)) = CATEGORY_REQUIREMENTS
        .iter()
        .find(|(keyword, _)| category.contains(keyword))
    {
        deps.extend_from_slice(extra);
    }
    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_match_beats_category_match() {
        let table = [("script", "Reader"), ("lab", "Analyst")];
        assert_eq!(
            suggest_with(&table, "ScriptDragon", "Document", "Processor"),
            "Reader"
        );
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let table = [("script", "Reader"), ("lab", "Analyst")];
        assert_eq!(suggest_with(&table, "Zeta", "Widgets", "Processor"), "Processor");
        assert_eq!(suggest_class_suffix("Zeta", "Widgets"), DEFAULT_CLASS_SUFFIX);
    }

    #[test]
    fn test_category_used_when_name_misses() {
        assert_eq!(suggest_class_suffix("Zeta", "Audio"), "Ear");
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // "imagecode" contains both "image" and "code"; "image" ranks first.
        assert_eq!(suggest_class_suffix("imagecode", ""), "Eye");
        // "Database" contains "data" (Analyst) before reaching later entries.
        assert_eq!(suggest_class_suffix("Database", ""), "Analyst");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(suggest_class_suffix("SIGHT", "x"), "Eye");
        assert_eq!(suggest_file_extension("AUDIO"), "wav");
    }

    #[test]
    fn test_file_extension_lookup() {
        assert_eq!(suggest_file_extension("image"), "jpg");
        assert_eq!(suggest_file_extension("audio"), "wav");
        assert_eq!(suggest_file_extension("unknown"), "txt");
        assert_eq!(suggest_file_extension("source code"), "py");
    }

    #[test]
    fn test_input_component_exact_lookup() {
        assert_eq!(input_component("Image").component, "Image");
        assert_eq!(input_component("audio").kind, "filepath");
        assert_eq!(input_component("text").params, "lines=5");
        // Substrings do not count for components.
        assert_eq!(input_component("images"), InputComponent::FILE);
        assert_eq!(input_component("video"), InputComponent::FILE);
    }

    #[test]
    fn test_requirements_per_category() {
        assert_eq!(requirements("data"), BASE_REQUIREMENTS.to_vec());

        let audio = requirements("Audio clips");
        assert!(audio.ends_with(&["librosa", "soundfile", "pydub"]));

        let image = requirements("image");
        assert_eq!(image.last(), Some(&"opencv-python"));

        let docs = requirements("document");
        assert!(docs.contains(&"PyPDF2"));
        assert!(docs.contains(&"python-docx"));
    }

    #[test]
    fn test_requirements_first_match_only() {
        let deps = requirements("audio image");
        assert!(deps.contains(&"librosa"));
        assert!(!deps.contains(&"opencv-python"));
    }
}
