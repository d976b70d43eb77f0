//! Prompt synthesis.
//!
//! Pure string construction: every builder is deterministic for identical
//! inputs and embeds the serialized spec/code verbatim, since the remote
//! model is sensitive to exact wording.

use codesmith_catalog::Spec;

use crate::optimizer::OptimizeLevel;

/// Shared safety/style preamble prepended to every prompt.
pub const SYSTEM_SAFETY: &str = "\
You are a senior Python engineer and performance-minded code reviewer.
- Generate idiomatic Python 3.10+ code following PEP 8.
- Add minimal docstrings and type hints.
- Do not include placeholder text like 'your code here'.
- Avoid external dependencies beyond the standard library unless the spec requires them.
- Ensure deterministic behavior and avoid randomness.";

fn spec_json(spec: &Spec) -> String {
    // A Spec is plain data with string keys; serialization cannot fail.
    serde_json::to_string_pretty(spec).expect("spec serializes to JSON")
}

/// Prompt for generating a complete module implementing `spec`.
pub fn generation_prompt(spec: &Spec) -> String {
    format!(
        "{SYSTEM_SAFETY}\n\n\
        Task: Implement the following specification as a complete Python module with:\n\
        - function(s) defined per the signature\n\
        - clear docstrings and type hints\n\
        - edge case handling\n\
        - time and space complexity notes in a top-level module docstring\n\n\
        Specification (JSON):\n{}\n\n\
        Output ONLY valid Python code for a single .py file, with no markdown.",
        spec_json(spec)
    )
}

/// Prompt for generating a test module against already-generated code.
pub fn tests_prompt(spec: &Spec, generated_code: &str) -> String {
    format!(
        "{SYSTEM_SAFETY}\n\n\
        Task: Write a pytest test module for the implementation below, reflecting the spec.\n\
        - Include happy-path tests and at least 2 edge cases.\n\
        - Use parameterized tests when appropriate.\n\
        - Avoid network or file I/O.\n\n\
        Spec (JSON):\n{}\n\n\
        Implementation code:\n{generated_code}\n\n\
        Output ONLY valid Python test code for a single test_*.py file, no markdown.",
        spec_json(spec)
    )
}

/// Prompt for refactoring `code` at the named level.
pub fn optimization_prompt(code: &str, level: OptimizeLevel) -> String {
    format!(
        "{SYSTEM_SAFETY}\n\n\
        Refactor and optimize the following Python code. Apply these levels: {level}.\n\
        - Maintain identical public API and behavior.\n\
        - Improve readability (naming, structure) and add type hints.\n\
        - Optimize algorithmic complexity if feasible; otherwise micro-optimizations.\n\
        - Avoid premature optimization that harms clarity.\n\n\
        Original code:\n{code}\n\n\
        Output ONLY the optimized code as a single Python file."
    )
}

/// Prompt for a plain-text explanation of `code`.
pub fn explanation_prompt(code: &str) -> String {
    format!(
        "{SYSTEM_SAFETY}\n\n\
        Explain the code below for a mid-level Python developer.\n\
        - Overview, key functions, algorithm choice\n\
        - Complexity analysis\n\
        - Potential failure modes and tests worth adding\n\n\
        Code:\n{code}\n\n\
        Return a concise explanation in plain text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> Spec {
        Spec::template(
            "binary_search",
            "Binary Search",
            "Find a target in a sorted array.",
            "def binary_search(arr, target):",
        )
    }

    #[test]
    fn test_generation_prompt_embeds_spec_verbatim() {
        let spec = sample_spec();
        let prompt = generation_prompt(&spec);

        assert!(prompt.starts_with(SYSTEM_SAFETY));
        assert!(prompt.contains("\"id\": \"binary_search\""));
        assert!(prompt.contains("def binary_search(arr, target):"));
        assert!(prompt.contains("no markdown"));
    }

    #[test]
    fn test_tests_prompt_embeds_generated_code() {
        let spec = sample_spec();
        let code = "def binary_search(arr, target):\n    return -1";
        let prompt = tests_prompt(&spec, code);

        assert!(prompt.contains(code));
        assert!(prompt.contains("at least 2 edge cases"));
        assert!(prompt.contains("Avoid network or file I/O"));
    }

    #[test]
    fn test_optimization_prompt_names_the_level() {
        let prompt = optimization_prompt("x = 1", OptimizeLevel::Readability);
        assert!(prompt.contains("Apply these levels: readability."));
        assert!(prompt.contains("Maintain identical public API"));
        assert!(prompt.contains("x = 1"));
    }

    #[test]
    fn test_explanation_prompt_covers_required_sections() {
        let prompt = explanation_prompt("x = 1");
        assert!(prompt.contains("Overview"));
        assert!(prompt.contains("Complexity analysis"));
        assert!(prompt.contains("failure modes"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let spec = sample_spec();
        assert_eq!(generation_prompt(&spec), generation_prompt(&spec));
        assert_eq!(tests_prompt(&spec, "code"), tests_prompt(&spec, "code"));
        assert_eq!(
            optimization_prompt("code", OptimizeLevel::All),
            optimization_prompt("code", OptimizeLevel::All)
        );
        assert_eq!(explanation_prompt("code"), explanation_prompt("code"));
    }
}
