// Resume evaluation prompt template.
// The rubric here is the whole scoring contract; the model computes the score.

pub const RESUME_EVAL_PROMPT: &str = r#"You are an intelligent resume evaluator. Given the resume text below, extract key candidate details and assign a quality score between 0.0 and 1.0. Be precise and strict in evaluation: do not award score if evidence is weak or missing.

---

Return the following as valid JSON:

- name
- education
- experience_summary
- skills (list)
- projects_summary
- github_or_portfolio_links (list): extract all valid URLs, especially GitHub, portfolio, LinkedIn
- certifications (list)
- participation (societies, hackathons, etc.)
- score (float between 0.0 and 1.0)
- tier: "high" (score >= 0.75), "medium" (0.4 - 0.74), "low" (<= 0.39)
- tags (list): choose from ["focused", "project_ready", "poor_formatting", "incomplete", "well_presented", "github_present", "certified", "inactive_profile", "diverse_skills", "academic"]

---

Scoring Criteria (Max 20 raw points, normalized to 0.0 - 1.0):

Profile Depth & Quality (10 pts)
- 2-3 focused domains (e.g., ML, web, systems) -> +4
- 6+ unrelated areas -> -2
- Skills backed by real projects -> +5
- Skills with no project evidence -> 0
- Clean formatting and structure -> +3
- Poor formatting or messy resume -> -3

Technical Strength (6 pts)
- GitHub or portfolio with real projects -> +5
- Missing or empty links -> 0
- Certifications (Coursera, Google, etc.) -> +2
- Participation in hackathons/societies -> +2

Academic Background (4 pts)
- Tier 1 college -> +4
- Tier 2 -> +2
- Tier 3/unknown -> 0

---

Instructions:
- Normalize total score: `normalized_score = round(raw_score / 20, 2)`
- Strictly extract GitHub/portfolio URLs. Do NOT guess.
- If info is missing, leave field empty or null.
- Respond with valid JSON only.

---

Resume Content:
"""{resume_text}"""
"#;
