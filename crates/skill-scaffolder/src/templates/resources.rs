//! Placeholder files for scripts/, references/ and assets/

use super::{render, ScriptLanguage};

const PYTHON_SCRIPT: &str = r#"#!/usr/bin/env python3
"""
Example helper script for {identifier}

Replace with actual implementation or delete if not needed.
"""

def main():
    print("Example script for {identifier}")
    # TODO: Add actual script logic

if __name__ == "__main__":
    main()
"#;

const SHELL_SCRIPT: &str = r#"#!/usr/bin/env bash
#
# Example helper script for {identifier}
#
# Replace with actual implementation or delete if not needed.

set -euo pipefail

main() {
    echo "Example script for {identifier}"
    # TODO: Add actual script logic
}

main "$@"
"#;

const JAVASCRIPT_SCRIPT: &str = r#"#!/usr/bin/env node
/**
 * Example helper script for {identifier}
 *
 * Replace with actual implementation or delete if not needed.
 */

function main() {
  console.log("Example script for {identifier}");
  // TODO: Add actual script logic
}

main();
"#;

const TYPESCRIPT_SCRIPT: &str = r#"#!/usr/bin/env -S npx tsx
/**
 * Example helper script for {identifier}
 *
 * Replace with actual implementation or delete if not needed.
 */

function main(): void {
  console.log("Example script for {identifier}");
  // TODO: Add actual script logic
}

main();
"#;

const REFERENCE: &str = r#"# Reference Documentation for {title}

Replace with actual reference content or delete if not needed.

## When Reference Docs Are Useful

- Comprehensive API documentation
- Detailed workflow guides
- Complex multi-step processes
- Information too lengthy for main SKILL.md
"#;

const ASSET: &str = r#"# Example Asset Placeholder

Replace with actual asset files (templates, images, fonts, etc.) or delete.

Asset files are used within output, not loaded into context.
"#;

/// Placeholder script for `identifier` in the chosen language
pub fn render_script(language: ScriptLanguage, identifier: &str) -> String {
    let template = match language {
        ScriptLanguage::Python => PYTHON_SCRIPT,
        ScriptLanguage::Shell => SHELL_SCRIPT,
        ScriptLanguage::JavaScript => JAVASCRIPT_SCRIPT,
        ScriptLanguage::TypeScript => TYPESCRIPT_SCRIPT,
    };
    render(template, &[("identifier", identifier)])
}

pub fn render_reference(title: &str) -> String {
    render(REFERENCE, &[("title", title)])
}

/// The asset placeholder has no substitutions
pub fn render_asset() -> String {
    ASSET.to_string()
}
