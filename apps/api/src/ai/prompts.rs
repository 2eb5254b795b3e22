// Prompt constants for the AI gateway. Placeholders are filled with
// `llm_client::prompts::fill_template`.

pub const COVER_LETTER_SYSTEM: &str = "You are an expert career coach who writes tailored, \
    concise cover letters grounded strictly in the candidate's resume.";

/// Replace: {job_description}, {resume}, {tone}, {key_qualifications}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter for the job below.

The tone should be {tone}. Emphasise these key qualifications where the resume supports them:
{key_qualifications}

Do not invent employers, titles, dates or achievements that are not in the resume.
Address the letter to the hiring manager and keep it under 400 words.

Return a JSON object with this EXACT schema:
{"coverLetter": "<the full letter as plain text with \n between paragraphs>"}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}"#;

pub const REVIEW_SYSTEM: &str =
    "You are an expert career coach specializing in resume writing and applicant tracking systems.";

/// Replace: {resume_text}
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Analyze the resume below and assess its strengths and weaknesses.

Give the resume an overall score between 0 and 100, and score each of these dimensions between 0 and 100:
writing style, clarity, impact, structure.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 78,
  "strengths": "What the resume does well, as a short paragraph or bullet list.",
  "areasForImprovement": "Where it falls short, explaining the score.",
  "actionableSuggestions": "Concrete edits the candidate can make.",
  "detailedScore": {"writingStyle": 80, "clarity": 75, "impact": 60, "structure": 90}
}

RESUME TEXT:
{resume_text}"#;

pub const INTERVIEW_SYSTEM: &str = "You are an expert career coach and interviewer.";

/// Replace: {topic}, {existing_questions}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"A user wants to practice for an interview.

Given the topic or job role below, generate between 5 and 10 common and insightful interview questions.
For each question, provide a detailed, well-structured, ideal answer.
{existing_questions}
Return a JSON object with this EXACT schema:
{"qaPairs": [{"question": "...", "answer": "..."}]}

TOPIC:
{topic}"#;

/// Prefix for the list of questions the model must not repeat.
pub const EXISTING_QUESTIONS_PREAMBLE: &str =
    "\nGenerate new questions that are different from the ones already asked:\n";
