use anyhow::Result;

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.catalog);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    // Accept either a full document or a bare selection set.
    let trimmed = query.trim();
    let document = if trimmed.starts_with('{') || trimmed.starts_with("query") {
        query
    } else {
        format!("{{ {} }}", query)
    };

    let request = async_graphql::Request::new(&document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
