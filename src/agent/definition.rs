use crate::agent::interface::{
    AgentDefinition, AgentTool, AzureAiSearchToolResource, SearchIndexResource, SearchQueryType,
};
use crate::config::Settings;

pub const AGENT_NAME: &str = "product-assistant";

/// Sentence the agent is told to answer with when the knowledge base has nothing.
pub const REFUSAL: &str = "I apologize, but I don't have that information in my knowledge base.";

pub const INSTRUCTIONS: &str = r#"
system:
You are an assistant that provides information based on a knowledge base. You have access to an AI search tool that you must use for factual information.

Core principles:
1. For ANY factual information (dates, specifications, prices, features, etc.), you MUST verify using the knowledge base
2. NEVER make up or hallucinate information
3. If factual information is not found in the knowledge base, respond with: "I apologize, but I don't have that information in my knowledge base."
4. You may engage in general conversation without searching, but ANY factual claims must be verified
5. For questions about products, features, or any specific details, always search the knowledge base

Remember:
- All factual information MUST come from the knowledge base
- It's better to admit not having information than to provide unverified details
"#;

/// Search tool bound to the configured index in hybrid vector + semantic mode.
pub fn search_tool(settings: &Settings) -> AgentTool {
    AgentTool::AzureAiSearch {
        azure_ai_search: AzureAiSearchToolResource {
            indexes: vec![SearchIndexResource {
                project_connection_id: settings.search_connection_id(),
                index_name: settings.search_index.clone(),
                query_type: SearchQueryType::VectorSemanticHybrid,
            }],
        },
    }
}

pub fn build_definition(settings: &Settings) -> AgentDefinition {
    AgentDefinition {
        kind: "prompt".to_string(),
        model: settings.chat_deployment.clone(),
        instructions: INSTRUCTIONS.to_string(),
        tools: vec![search_tool(settings)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_contain_exact_refusal() {
        assert!(INSTRUCTIONS.contains(REFUSAL));
    }

    #[test]
    fn definition_binds_single_search_index() {
        let settings = Settings {
            subscription_id: "S".to_string(),
            resource_group: "R".to_string(),
            project_name: "bar".to_string(),
            search_index: "products".to_string(),
            openai_endpoint: "https://foo.cognitiveservices.azure.com/".to_string(),
            ..Settings::default()
        };

        let definition = build_definition(&settings);
        assert_eq!(definition.kind, "prompt");
        assert_eq!(definition.model, "gpt-4.1-mini");
        assert_eq!(definition.tools.len(), 1);

        let AgentTool::AzureAiSearch { azure_ai_search } = &definition.tools[0];
        let index = &azure_ai_search.indexes[0];
        assert_eq!(index.index_name, "products");
        assert_eq!(index.query_type, SearchQueryType::VectorSemanticHybrid);
        assert_eq!(index.project_connection_id, settings.search_connection_id());
    }
}
