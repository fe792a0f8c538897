use crate::evaluation::skills::{normalize_skills, render_skill_list, SkillSet, SynonymTable};

fn names(skills: &SkillSet) -> Vec<&str> {
    skills.iter().map(|token| token.as_str()).collect()
}

#[test]
fn splits_on_commas_semicolons_and_newlines() {
    let skills = normalize_skills("Python, SQL; Docker\nTerraform", &SynonymTable::default());
    assert_eq!(names(&skills), vec!["docker", "python", "sql", "terraform"]);
}

#[test]
fn folds_known_aliases_onto_canonical_names() {
    let skills = normalize_skills("JS; k8s, Postgres, golang", &SynonymTable::default());
    assert_eq!(names(&skills), vec!["go", "javascript", "kubernetes", "postgresql"]);
}

#[test]
fn dedupes_case_and_spacing_variants() {
    let skills = normalize_skills("Python,  python , PYTHON", &SynonymTable::default());
    assert_eq!(names(&skills), vec!["python"]);
}

#[test]
fn blank_or_degenerate_input_yields_empty_set() {
    let synonyms = SynonymTable::default();
    assert!(normalize_skills("", &synonyms).is_empty());
    assert!(normalize_skills("   ", &synonyms).is_empty());
    assert!(normalize_skills(" ,, ;; \n , ", &synonyms).is_empty());
    assert!(normalize_skills("***, !!!", &synonyms).is_empty());
}

#[test]
fn keeps_meaningful_punctuation_in_names() {
    let skills = normalize_skills("C++, C#, Node.js, CI/CD", &SynonymTable::default());
    assert_eq!(names(&skills), vec!["c#", "c++", "ci/cd", "nodejs"]);
}

#[test]
fn strips_trailing_sentence_periods_only() {
    let skills = normalize_skills("experienced in Python.", &SynonymTable::default());
    assert_eq!(names(&skills), vec!["experienced in python"]);

    let skills = normalize_skills("node.js", &SynonymTable::empty());
    assert_eq!(names(&skills), vec!["node.js"]);
}

#[test]
fn normalization_is_idempotent() {
    let synonyms = SynonymTable::default();
    let first = normalize_skills("JS; Postgres, Docker, k8s", &synonyms);
    let second = normalize_skills(&render_skill_list(&first), &synonyms);
    assert_eq!(first, second);
}

#[test]
fn with_aliases_replaces_the_default_table() {
    let synonyms = SynonymTable::with_aliases([("rdbms", "postgresql"), ("  ", "dropped")]);
    let skills = normalize_skills("RDBMS, js", &synonyms);
    // "js" stays as-is: the custom table replaced the default aliases.
    assert_eq!(names(&skills), vec!["js", "postgresql"]);
}

#[test]
fn empty_table_treats_every_cleaned_token_as_canonical() {
    let skills = normalize_skills("js, k8s", &SynonymTable::empty());
    assert_eq!(names(&skills), vec!["js", "k8s"]);
}
