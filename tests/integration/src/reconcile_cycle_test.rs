//! End-to-end reconciliation cycles against a real temp filesystem
//!
//! The notify watcher is not spawned here; change events are driven through
//! the loop's step function directly, with the source and destination on
//! disk exactly as the CLI would manage them.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

use di18n_engine::{Action, OutputWriter, Publication, ReconcileLoop, SkipReason};
use di18n_template::to_canonical_string;

struct Harness {
    _temp: TempDir,
    source: std::path::PathBuf,
    destination: std::path::PathBuf,
    engine: ReconcileLoop,
    writer: OutputWriter,
}

impl Harness {
    /// Bootstrap from an initial template and run the first persist cycle,
    /// consuming the self-write like the real watcher would.
    fn start(initial: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("i18n.json");
        let destination = temp.path().join("locales");
        fs::write(&source, initial).unwrap();
        fs::create_dir_all(&destination).unwrap();

        let raw = fs::read_to_string(&source).unwrap();
        let (mut engine, publication) = ReconcileLoop::bootstrap(&raw, &[]).unwrap();
        let writer = OutputWriter::new(&destination);
        persist(&source, &writer, &publication);

        let echo = fs::read_to_string(&source).unwrap();
        assert!(matches!(
            engine.handle_change(&echo),
            Action::Skip(SkipReason::SelfWrite)
        ));

        Self {
            _temp: temp,
            source,
            destination,
            engine,
            writer,
        }
    }

    /// Simulate an external edit to the source file and one change event.
    fn edit(&mut self, content: &str) -> Action {
        fs::write(&self.source, content).unwrap();
        let raw = fs::read_to_string(&self.source).unwrap();
        let action = self.engine.handle_change(&raw);
        if let Action::Publish(publication) = &action {
            persist(&self.source, &self.writer, publication);
            let echo = fs::read_to_string(&self.source).unwrap();
            assert!(matches!(
                self.engine.handle_change(&echo),
                Action::Skip(SkipReason::SelfWrite)
            ));
        }
        action
    }

    fn output(&self, tag: &str) -> Option<Value> {
        let path = self.destination.join(format!("{tag}.json"));
        let raw = fs::read_to_string(path).ok()?;
        Some(serde_json::from_str(&raw).unwrap())
    }

    fn source_template(&self) -> Value {
        serde_json::from_str(&fs::read_to_string(&self.source).unwrap()).unwrap()
    }
}

fn persist(source: &Path, writer: &OutputWriter, publication: &Publication) {
    fs::write(source, &publication.canonical).unwrap();
    writer
        .regenerate(&publication.template, &publication.tags)
        .unwrap();
}

#[test]
fn initial_pass_projects_every_discovered_language() {
    let harness = Harness::start(r#"{"title": {"lang:en": "Hi", "lang:fr": "Salut"}}"#);

    assert_eq!(harness.output("en").unwrap(), json!({"title": "Hi"}));
    assert_eq!(harness.output("fr").unwrap(), json!({"title": "Salut"}));
    assert_eq!(
        harness.source_template()["dealerI18n:lang"],
        json!(["en", "fr"])
    );

    // The persisted source is already in canonical form: re-canonicalizing
    // what is on disk reproduces it byte for byte.
    let persisted = fs::read_to_string(&harness.source).unwrap();
    assert_eq!(
        persisted,
        to_canonical_string(&harness.source_template()).unwrap()
    );
}

#[test]
fn declaring_a_new_language_creates_placeholder_output() {
    let mut harness = Harness::start(r#"{"title": {"lang:en": "Hi", "lang:fr": "Salut"}}"#);

    let mut edited = harness.source_template();
    edited["dealerI18n:lang"] = json!(["en", "fr", "es"]);
    let action = harness.edit(&edited.to_string());
    assert!(matches!(action, Action::Publish(_)));

    assert_eq!(harness.output("es").unwrap(), json!({"title": ""}));
    assert_eq!(
        harness.source_template()["title"]["lang:es"],
        json!("")
    );
}

#[test]
fn removing_a_language_from_content_retires_its_output() {
    let mut harness = Harness::start(r#"{"title": {"lang:en": "Hi", "lang:fr": "Salut"}}"#);

    // fr removed from the node while the directive still lists it.
    let edited = json!({
        "dealerI18n:lang": ["en", "fr"],
        "title": {"lang:en": "Hi"}
    });
    let action = harness.edit(&edited.to_string());
    assert!(matches!(action, Action::Publish(_)));

    assert!(harness.output("fr").is_none());
    assert_eq!(harness.output("en").unwrap(), json!({"title": "Hi"}));
    assert_eq!(
        harness.source_template()["dealerI18n:lang"],
        json!(["en"])
    );
}

#[test]
fn malformed_json_leaves_everything_untouched() {
    let mut harness = Harness::start(r#"{"title": {"lang:en": "Hi"}}"#);

    let action = harness.edit("{ broken");
    assert!(matches!(action, Action::Skip(SkipReason::Unparseable)));
    assert_eq!(harness.output("en").unwrap(), json!({"title": "Hi"}));

    // The loop keeps working once a valid revision arrives.
    let edited = json!({
        "title": {"lang:en": "Hi"},
        "cta": {"lang:en": "Go"}
    });
    assert!(matches!(harness.edit(&edited.to_string()), Action::Publish(_)));
    assert_eq!(
        harness.output("en").unwrap(),
        json!({"title": "Hi", "cta": "Go"})
    );
}

#[test]
fn content_edit_then_language_edit_compose() {
    let mut harness = Harness::start(r#"{"title": {"lang:en": "Hi"}}"#);

    // Add a structural section.
    let edited = json!({
        "title": {"lang:en": "Hi"},
        "footer": {"legal": {"lang:en": "Terms"}}
    });
    harness.edit(&edited.to_string());
    assert_eq!(
        harness.output("en").unwrap(),
        json!({"title": "Hi", "footer": {"legal": "Terms"}})
    );

    // Then declare German.
    let mut declared = harness.source_template();
    declared["dealerI18n:lang"] = json!(["en", "de"]);
    harness.edit(&declared.to_string());

    assert_eq!(
        harness.output("de").unwrap(),
        json!({"title": "", "footer": {"legal": ""}})
    );
}
