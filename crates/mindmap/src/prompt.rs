//! Prompt for the generative mind-map attempt. The JSON schema embedded
//! here matches the serde shape in [`crate::schema`].

pub const MIND_MAP_SYSTEM: &str = "You are an expert at creating interconnected conceptual \
     mind maps that show meaningful relationships between ideas.";

pub fn build_mind_map_prompt(summary_text: &str) -> String {
    format!(
        r#"Create a conceptual mind map that shows how ideas connect and relate to each other. This should be like a knowledge network, not just a list of topics.

ANALYZE THE CONTENT AND:
1. Identify the CENTRAL CONCEPT (main theme)
2. Find KEY CONCEPTS that relate to the central idea
3. Discover SUPPORTING CONCEPTS that explain or expand the key concepts
4. Identify RELATIONSHIPS between concepts (cause-effect, part-whole, process steps, comparisons)
5. Find PRACTICAL APPLICATIONS or real-world connections
6. Include INTERCONNECTIONS between different branches (this is crucial!)

Return JSON with this structure:
{{
    "nodes": [
        {{"id": "central", "label": "Core Concept Title", "type": "central", "description": "Main idea that everything connects to", "size": "large"}},
        {{"id": "key1", "label": "Key Concept 1", "type": "key", "description": "Important related idea", "size": "medium"}},
        {{"id": "support1", "label": "Supporting Detail", "type": "support", "description": "Explains or expands the key concept", "size": "small"}},
        {{"id": "application1", "label": "Real Application", "type": "application", "description": "How this applies in practice", "size": "small"}},
        {{"id": "connection1", "label": "Bridge Concept", "type": "bridge", "description": "Links different areas together", "size": "small"}}
    ],
    "edges": [
        {{"from": "central", "to": "key1", "label": "relates to", "type": "primary"}},
        {{"from": "key1", "to": "support1", "label": "explained by", "type": "elaborates"}},
        {{"from": "key1", "to": "application1", "label": "applied as", "type": "implements"}},
        {{"from": "support1", "to": "application1", "label": "enables", "type": "causes"}},
        {{"from": "key1", "to": "key2", "label": "connects with", "type": "cross_link"}}
    ]
}}

RULES:
- At least one node must have type "central"
- The edge list must not be empty
- Every edge endpoint must be the id of a node in the list
- Include cross-connections between different branches
- Output ONLY the JSON object, no markdown, no explanations

Summary: {}

Create interconnected conceptual mind map JSON:"#,
        summary_text
    )
}
