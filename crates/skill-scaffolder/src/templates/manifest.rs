//! SKILL.md manifest template and front matter parsing

use super::render;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Marker line delimiting the front matter block
const FRONT_MATTER_MARKER: &str = "---";

/// Description placeholder written into new manifests
pub const DESCRIPTION_PLACEHOLDER: &str = "[TODO: Complete and informative explanation of what the skill does and when to use it. Include WHEN to use this skill - specific scenarios, file types, or tasks that trigger it.]";

/// Metadata block at the top of the manifest
const FRONT_MATTER: &str = "---\nname: {identifier}\ndescription: {description}\n---\n";

/// Body of the manifest, following the front matter
const MANIFEST_BODY: &str = r#"# {title}

## Overview

[TODO: 1-2 sentences explaining what this skill enables]

## When to Use

[TODO: Specific triggers and scenarios - remember this is loaded AFTER triggering, so keep brief]

## Workflow

[TODO: Step-by-step procedures or decision trees]

## Resources

This skill includes:

### scripts/
Executable code that can be run directly.

### references/
Documentation loaded into context as needed.

### assets/
Templates and files used in output (not loaded into context).

---

**Delete unused directories.** Not every skill needs all resource types.
"#;

/// Metadata block at the top of SKILL.md
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillFrontMatter {
    /// Skill identifier, identical to the bundle directory name
    pub name: String,

    /// What the skill does and when it should trigger
    pub description: String,
}

impl SkillFrontMatter {
    /// Front matter for a freshly scaffolded skill
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: DESCRIPTION_PLACEHOLDER.to_string(),
        }
    }
}

/// Render the full SKILL.md for `identifier`, titled `title`
pub fn render_manifest(identifier: &str, title: &str) -> String {
    let front_matter = render(
        FRONT_MATTER,
        &[("identifier", identifier), ("description", DESCRIPTION_PLACEHOLDER)],
    );
    format!(
        "{}\n{}",
        front_matter,
        render(MANIFEST_BODY, &[("title", title)])
    )
}

/// Extract and parse the front matter block of a SKILL.md.
///
/// Values are read as written: `name: 007` yields `"007"` and the bracketed
/// description placeholder stays a string. Quoted values are unquoted.
pub fn parse_front_matter(content: &str) -> Result<SkillFrontMatter> {
    let mut lines = content.lines();
    if lines.next().map(str::trim_end) != Some(FRONT_MATTER_MARKER) {
        anyhow::bail!("Manifest does not start with a '{}' line", FRONT_MATTER_MARKER);
    }

    let mut fields = Mapping::new();
    let mut terminated = false;
    for line in lines {
        let line = line.trim_end();
        if line == FRONT_MATTER_MARKER {
            terminated = true;
            break;
        }
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let (key, raw) = line
            .split_once(':')
            .with_context(|| format!("Malformed front matter line: {}", line))?;
        fields.insert(
            Value::String(key.trim().to_string()),
            Value::String(scalar_text(raw.trim())?),
        );
    }

    if !terminated {
        anyhow::bail!(
            "Manifest front matter is not terminated by a '{}' line",
            FRONT_MATTER_MARKER
        );
    }

    serde_yaml::from_value(Value::Mapping(fields))
        .context("Failed to parse manifest front matter")
}

/// Plain values are taken verbatim; quoted ones are decoded as YAML strings
fn scalar_text(raw: &str) -> Result<String> {
    let quoted = raw.len() >= 2
        && ((raw.starts_with('\'') && raw.ends_with('\''))
            || (raw.starts_with('"') && raw.ends_with('"')));
    if quoted {
        serde_yaml::from_str(raw).with_context(|| format!("Invalid quoted value: {}", raw))
    } else {
        Ok(raw.to_string())
    }
}
