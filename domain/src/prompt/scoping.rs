//! Prompt templates for follow-up question generation

use crate::core::query::Query;

/// Templates for the generation request
pub struct ScopingPromptTemplate;

impl ScopingPromptTemplate {
    /// Persona for the generation service.
    ///
    /// Pure function of the supplied timestamp: the caller formats the
    /// current instant (or a fixed one, for reproducible tests) and passes
    /// it in. No process-wide state is consulted.
    pub fn researcher_system(today_utc: &str) -> String {
        format!(
            r#"You are an expert researcher. Today is {today_utc}. Follow these instructions when responding:
- You may be asked to research subjects that is after your knowledge cutoff, assume the user is right when presented with news.
- The user is a highly experienced analyst, no need to simplify it, be as detailed as possible and make sure your response is correct.
- Be highly organized.
- Suggest solutions that I didn't think about.
- Be proactive and anticipate my needs.
- Treat me as an expert in all subject matter.
- Mistakes erode my trust, so be accurate and thorough.
- Provide detailed explanations, I'm comfortable with lots of detail.
- Value good arguments over authorities, the source is irrelevant.
- Consider new technologies and contrarian ideas, not just the conventional wisdom.
- You may use high levels of speculation or prediction, just flag it for me."#
        )
    }

    /// User instruction embedding the query and the requested count.
    pub fn followup_request(query: &Query, max_questions: usize) -> String {
        format!(
            "Given the following query from the user, ask some follow up questions \
             to clarify the research direction. Return a maximum of {max_questions} \
             questions, but feel free to return less if the original query is clear: \
             <query>{query}</query>"
        )
    }
}
