//! Operator prompts.
//!
//! On a terminal the questions are driven by `dialoguer`. Otherwise (piped
//! input, tests) [`Prompter`] reads plain lines from any reader and writes to
//! any writer. Free-text prompts accept empty input (the caller substitutes a
//! default); the scheme menu re-asks until the input is valid. End of input
//! is treated as the operator cancelling.

use crate::config::{Answers, ColorScheme};
use crate::error::{Result, SmithError};
use dialoguer::{Error as DialoguerError, Input, Select};
use std::io::{BufRead, ErrorKind, Write};

/// A source of answers for the setup questions.
pub trait Prompt {
    /// Print a line to the operator.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Ask a free-text question. Blank answers come back as `None`.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Offer the color schemes until one is picked.
    fn choose_scheme(&mut self) -> Result<ColorScheme>;

    /// Print a section heading.
    fn section(&mut self, title: &str) -> Result<()> {
        self.say("")?;
        self.say(title)?;
        self.say(&"-".repeat(20))
    }

    /// Ask for a comma-separated list. Blank entries are dropped.
    fn ask_list(&mut self, question: &str) -> Result<Vec<String>> {
        Ok(self
            .ask(question)?
            .map(|answer| split_list(&answer))
            .unwrap_or_default())
    }
}

/// Run the full question sequence.
///
/// `suggested_port` is only displayed; resolving the fallback happens
/// during assembly.
pub fn collect_answers<P: Prompt + ?Sized>(
    prompt: &mut P,
    suggested_port: u16,
) -> Result<Answers> {
    let mut answers = Answers::default();

    prompt.say("📝 Basic Configuration")?;
    prompt.say(&"-".repeat(20))?;
    answers.name = prompt.ask("Enter your Dragon name (e.g., 'Script', 'Lab', 'Code')")?;
    answers.data_type =
        prompt.ask("What type of data will this analyze? (e.g., 'Document', 'Video', 'Code')")?;
    let display_name = answers.name.as_deref().unwrap_or("Custom").to_string();
    answers.description = prompt.ask(&format!("Brief description of Dragon{display_name}"))?;
    answers.emoji = prompt.ask(&format!(
        "Choose an emoji for Dragon{display_name} (e.g., 📄, 🎬, 💻)"
    ))?;

    prompt.section("🔌 API Configuration")?;
    answers.default_model =
        prompt.ask("Default Ollama model name (e.g., 'llava', 'whisper', 'codellama')")?;
    answers.model_keywords =
        prompt.ask_list("Keywords to identify relevant models (comma-separated)")?;
    answers.openai_models =
        match prompt.ask("OpenAI models to include (comma-separated, or 'none')")? {
            Some(answer) if answer.eq_ignore_ascii_case("none") => Some(Vec::new()),
            Some(answer) => Some(split_list(&answer)).filter(|models| !models.is_empty()),
            None => None,
        };

    prompt.section("🎨 UI Configuration")?;
    answers.color_scheme = prompt.choose_scheme()?;
    answers.port = prompt.ask(&format!("Port number (suggested: {suggested_port})"))?;

    prompt.section("⚡ Data Flow Configuration")?;
    answers.input_param = prompt.ask("Input parameter name (e.g., 'image_data', 'audio_file')")?;
    answers.output_param =
        prompt.ask("Output parameter name (e.g., 'description', 'transcription')")?;
    answers.default_prompt = prompt.ask("Default analysis prompt")?;
    answers.descriptors =
        prompt.ask_list("Relevant descriptors for metadata (comma-separated)")?;

    Ok(answers)
}

/// Interactive prompts on a terminal, via `dialoguer`.
pub struct TerminalPrompter;

impl Prompt for TerminalPrompter {
    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(dialoguer_error)?;

        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn choose_scheme(&mut self) -> Result<ColorScheme> {
        let items: Vec<&str> = ColorScheme::ALL.iter().map(|scheme| scheme.title()).collect();
        let selection = Select::new()
            .with_prompt("Choose a color scheme")
            .items(&items)
            .default(0)
            .interact()
            .map_err(dialoguer_error)?;

        Ok(ColorScheme::ALL[selection])
    }
}

/// Line-based prompts over any reader/writer pair, for piped input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for Prompter<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(write_error)
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", question).map_err(write_error)?;
        self.output.flush().map_err(write_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| {
            SmithError::UserError(format!("failed to read answer: {}", e))
        })?;
        if read == 0 {
            return Err(SmithError::Cancelled);
        }

        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    /// Accepts a menu number or a scheme name; anything else is re-asked.
    fn choose_scheme(&mut self) -> Result<ColorScheme> {
        self.say("Available color schemes:")?;
        for (i, scheme) in ColorScheme::ALL.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, scheme.title()))?;
        }

        let question = format!("Choose a color scheme (1-{})", ColorScheme::ALL.len());
        loop {
            let choice = self.ask(&question)?.unwrap_or_default();
            if let Some(scheme) = parse_scheme_choice(&choice) {
                return Ok(scheme);
            }
            self.say("Invalid choice. Please try again.")?;
        }
    }
}

/// Accept a 1-based menu number or a scheme name.
fn parse_scheme_choice(choice: &str) -> Option<ColorScheme> {
    let choice = choice.trim();
    if !choice.is_empty() && choice.chars().all(|c| c.is_ascii_digit()) {
        return choice
            .parse::<usize>()
            .ok()
            .and_then(ColorScheme::from_menu_number);
    }
    ColorScheme::from_str(choice)
}

fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn write_error(e: std::io::Error) -> SmithError {
    SmithError::WriteError("<terminal>".to_string(), e.to_string())
}

fn dialoguer_error(e: DialoguerError) -> SmithError {
    match e {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => SmithError::Cancelled,
        DialoguerError::IO(err) if err.kind() == ErrorKind::UnexpectedEof => SmithError::Cancelled,
        err => SmithError::UserError(format!("failed to read answer: {}", err)),
    }
}
