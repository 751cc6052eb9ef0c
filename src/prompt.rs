//! The `mcp-demo` guided prompt.
//!
//! A single template that walks an agent through seeding the database around
//! a user-chosen topic and demonstrating the server end to end. Rendering is
//! plain string interpolation of the one `{topic}` placeholder.

use serde_json::{json, Value as JsonValue};

/// Name of the only registered prompt.
pub const PROMPT_NAME: &str = "mcp-demo";

const TEMPLATE: &str = r#"
The assistant's goal is to walk through an informative demo of this PostgreSQL
MCP server. The user has already picked a topic: {topic}. They are ready to
get started.

Some context on what this server exposes:
<mcp>
Prompts:
This prompt accepts a "topic" argument and guides the user through creating
tables, analyzing data, and generating insights. For example, a topic of
"retail sales" leads to relevant database tables and a guided analysis of
them. The prompt is an interactive template that structures the conversation.

Resources:
The server exposes one primary resource, "memo://insights", a business
insights memo that updates automatically during analysis. As insights are
discovered in the data, the memo reflects them in real time, acting as a
living document of the conversation.

Tools:
"read-query": run a SELECT query against the database
"write-query": run an INSERT, UPDATE, or DELETE query
"create-table": create a new table
"list-tables": list all existing tables
"describe-table": show the schema of a specific table
"append-insight": add a business insight to the memo resource
</mcp>

<instructions>
You are an AI assistant tasked with generating a comprehensive business
scenario from the given topic. Create a narrative with a data-driven business
problem, build the database structure to support it, generate relevant
queries, sketch a dashboard, and deliver a final solution. Pause for user
input at the steps below, but keep driving the scenario to completion. The
XML tags are for your understanding only and must not appear in output.

1. The user has selected the topic: {topic}.

2. Describe the business problem:
a. Outline a business situation or problem grounded in the topic.
b. Introduce an actor who needs to collect and analyze data from the
   database.
c. If the data does not exist yet, say so.

3. Set up the data:
a. Do not ask what data is needed; create it directly with the tools,
   confirming with the user before any table modification.
b. Design table schemas representing the data the problem requires.
c. Include at least 2-3 tables with appropriate columns and types.
d. Use the tools to create the tables in the database.
e. Write INSERT statements that fill each table with plausible synthetic
   data.
f. Make sure the data is varied and representative of the problem.

4. Pause for user input:
a. Summarize the data that was created.
b. Offer the user several multiple-choice options for the next step.
c. Present the options in natural language; when the user picks one,
   generate the matching query and run it with the appropriate tool.

5. Iterate on queries:
a. Offer one additional multiple-choice query option. This is a short demo,
   so keep the number of iterations low.
b. Explain the purpose of each option.
c. Wait for the user to choose.
d. After each query, comment on what the results show.
e. Record business insights discovered in the data with the append-insight
   tool.

6. Build a dashboard:
a. With the data and queries in hand, assemble a dashboard as an artifact.
b. Represent the data with a mix of tables, charts, and graphs.
c. Explain how each element relates to the business problem.

7. Present the final solution:
a. Each append-insight call has been updating the resource at
   memo://insights.
b. Tell the user the memo was updated at each stage of the analysis.
c. Ask the user to open the attachment menu (paperclip icon), choose the
   integrations menu, and select "Business Insights Memo".
d. That attaches the generated memo to the chat for additional context.
e. Present the final memo to the user as an artifact.

8. Wrap up:
a. Explain that this is only the beginning of what the PostgreSQL MCP
   server can do.
</instructions>

Stay consistent throughout the scenario: tables, data, queries, dashboard,
and solution should all tie back to the original business problem and the
given topic. Keep all output as readable as possible.
"#;

/// Render the template for a topic. The result is trimmed of surrounding
/// whitespace; rendering has no side effects.
pub fn render(topic: &str) -> String {
    TEMPLATE.replace("{topic}", topic).trim().to_string()
}

/// Descriptor for the `prompts/list` response.
pub fn descriptor() -> JsonValue {
    json!({
        "name": PROMPT_NAME,
        "description": "A prompt to seed the database with initial data and \
                        demonstrate what you can do with a PostgreSQL MCP \
                        Server + an AI agent",
        "arguments": [{
            "name": "topic",
            "description": "Topic to seed the database with initial data",
            "required": true,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_every_placeholder() {
        let text = render("retail sales");
        assert!(!text.contains("{topic}"));
        assert!(text.contains("The user has selected the topic: retail sales."));
    }

    #[test]
    fn render_trims_surrounding_whitespace() {
        let text = render("x");
        assert_eq!(text, text.trim());
        assert!(text.starts_with("The assistant's goal"));
    }

    #[test]
    fn render_is_pure() {
        assert_eq!(render("logistics"), render("logistics"));
    }

    #[test]
    fn descriptor_requires_topic() {
        let desc = descriptor();
        assert_eq!(desc["name"], PROMPT_NAME);
        assert_eq!(desc["arguments"][0]["name"], "topic");
        assert_eq!(desc["arguments"][0]["required"], true);
    }
}
