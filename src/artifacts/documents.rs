//! Embedded templates for the ancillary project files.
//!
//! These are rendered with the same engine as the app template, against the
//! assembled configuration.

/// Ignore file for a generated project.
pub(super) const GITIGNORE_TEMPLATE: &str = r#"# Virtual Environment
dragon{{type}}_env/

# Log files
*.log
*.jsonl

# Data files (temporary processing)
temp_{{type}}/

# Python cache
__pycache__/
*.py[cod]
*$py.class
*.so

# IDE files
.vscode/
.idea/
*.swp
*.swo

# OS files
.DS_Store
Thumbs.db

# Temporary files
*.tmp
*.temp"#;

/// Working notes for assistants and developers picking up a generated project.
pub(super) const GUIDE_TEMPLATE: &str = r#"# CLAUDE.md

This file provides guidance to AI coding assistants when working with code in this repository.

## Development Commands

### Running the Application
```bash
# Activate virtual environment (if not already active)
source dragon{{type}}_env/bin/activate

# Install dependencies (if needed)
pip install -r requirements.txt

# Run the main application
python dragon{{type}}_gradio.py
```

The application will launch on `http://localhost:{{PORT}}` with public sharing enabled by default.

## Architecture Overview

### Core Components

**Dragon{{CLASS_SUFFIX}} Class (dragon{{type}}_gradio.py:22-400)**
- Main application class handling all AI {{data_type}} analysis
- Supports multiple {{data_type}} providers: Ollama, OpenAI, Google, and others
- Implements intelligent fallback chain if primary model fails
- Manages API keys through environment variables

**Key Methods:**
- `get_available_models()` - Dynamically discovers available {{data_type}} models
- `analyze_{{type}}()` - Main analysis function that routes requests to appropriate API
- `try_*_{{type}}()` methods - Individual API implementations for each provider
- `log_analysis()` - Comprehensive logging with {{data_type}} metadata extraction

### Data Flow
1. {{DATA_TYPE}} upload → Processing
2. Model selection → Route to appropriate API handler
3. API response → Analysis with metadata extraction
4. Results display → Update logs table

### Color Scheme
**Dragon{{TYPE}}**: {{PRIMARY_COLOR}} theme (port {{PORT}})
- Easily identifiable when running multiple Dragon apps

### Environment Variables
```bash
# Optional API keys (application detects what's available)
OPENAI_API_KEY=your_key
GOOGLE_CLOUD_API_KEY=your_key
```

## Development Notes

- Application requires Ollama running locally on port 11434 for local models
- Gradio interface auto-launches on port {{PORT}}
- Dependencies are defined in requirements.txt
- All API provider integrations use direct REST API calls"#;
