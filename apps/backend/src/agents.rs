//! Agent catalogue: the fixed set of assistant personas and their
//! system-prompt templates.

const ONBOARDING_PROMPT: &str = "You are an expert interviewer conducting a comprehensive \
personality interview. Your goal is to extract deep insights about the user's personality, \
life experiences, learning preferences, and content creation goals through natural \
conversation. Ask thoughtful, engaging questions that help build a rich user profile.";

const KNOWLEDGE_PROMPT: &str = "You are a knowledge processing expert. Analyze the user's \
content and extract key themes, concepts, and insights. Help them understand patterns in \
their learning and make connections between different pieces of information.";

const MEMOIR_PROMPT: &str = "You are a skilled memoir writer. Help users create compelling \
personal narratives from their experiences and knowledge. Write in their authentic voice \
and create content that reflects their unique personality and journey.";

/// The supported agent types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Onboarding,
    Knowledge,
    Memoir,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Onboarding, AgentKind::Knowledge, AgentKind::Memoir];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Onboarding => "onboarding",
            AgentKind::Knowledge => "knowledge",
            AgentKind::Memoir => "memoir",
        }
    }

    /// Resolve a caller-supplied selector.
    ///
    /// Unknown or absent selectors fall back to the onboarding agent; that
    /// default is part of the API contract, not an error.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("knowledge") => AgentKind::Knowledge,
            Some("memoir") => AgentKind::Memoir,
            _ => AgentKind::Onboarding,
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            AgentKind::Onboarding => ONBOARDING_PROMPT,
            AgentKind::Knowledge => KNOWLEDGE_PROMPT,
            AgentKind::Memoir => MEMOIR_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AgentKind;

    #[test]
    fn test_selector_resolution() {
        assert_eq!(
            AgentKind::from_selector(Some("onboarding")),
            AgentKind::Onboarding
        );
        assert_eq!(
            AgentKind::from_selector(Some("knowledge")),
            AgentKind::Knowledge
        );
        assert_eq!(AgentKind::from_selector(Some("memoir")), AgentKind::Memoir);
    }

    #[test]
    fn test_unknown_selector_falls_back_to_onboarding() {
        assert_eq!(AgentKind::from_selector(None), AgentKind::Onboarding);
        assert_eq!(AgentKind::from_selector(Some("")), AgentKind::Onboarding);
        assert_eq!(
            AgentKind::from_selector(Some("archivist")),
            AgentKind::Onboarding
        );
    }

    #[test]
    fn test_every_agent_has_a_prompt() {
        for kind in AgentKind::ALL {
            assert!(!kind.system_prompt().is_empty());
            assert!(!kind.as_str().is_empty());
        }
    }
}
