// Resume parsing prompt templates.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

const RESUME_PARSE_ROLE: &str = "\
You are an expert resume parser. \
Extract structured information from resumes. \
Extract only information that is present; use empty strings for missing text fields \
and empty arrays for missing lists.";

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT: &str = r#"Parse this resume and return structured JSON data.

OUTPUT SCHEMA (return exactly this structure):
{
  "name": "Full Name",
  "email": "email@example.com",
  "phone": "+1-xxx-xxx-xxxx",
  "location": "City, State/Country",
  "skills": ["skill1", "skill2", "skill3"],
  "education": [
    {"degree": "Degree Name", "institution": "School Name", "year": "Year or Year Range", "details": "Additional details if any"}
  ],
  "experience": [
    {"title": "Job Title", "company": "Company Name", "duration": "Start - End Date", "description": "Brief description of role and achievements"}
  ],
  "projects": [
    {"name": "Project Name", "description": "Project description", "technologies": "Technologies used", "link": "Project link if available"}
  ],
  "socials": {
    "linkedin": "LinkedIn URL",
    "github": "GitHub URL",
    "website": "Personal website URL"
  }
}

RESUME:
{resume_text}"#;

/// Full system prompt for resume parsing.
pub fn resume_parse_system() -> String {
    format!("{RESUME_PARSE_ROLE} {JSON_ONLY_INSTRUCTION}")
}

pub fn resume_parse_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text)
}
