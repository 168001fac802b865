mod common;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quill_core::entities::{ArticleDraft, GoalDraft, ReferenceDraft, TaskDraft};
use quill_core::enums::CitationStyle;
use quill_core::errors::CoreError;
use quill_core::request::RequestState;
use quill_genai::PromptTask;
use quill_store::{KeyValueStore, MemoryStore, Site, StoreError};

use common::{BrittleStore, Reply, ScriptedTransport, workspace, workspace_with};

fn article(title: &str, abstract_text: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        ..ArticleDraft::default()
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ── Summaries ──────────────────────────────────────────────────────

#[test]
fn every_site_starts_idle() {
    let transport = ScriptedTransport::new([]);
    let ws = workspace(&transport);
    for site in Site::ALL {
        assert_eq!(ws.site(site), &RequestState::Idle);
    }
}

#[tokio::test]
async fn summary_is_generated_and_persisted() {
    let transport = ScriptedTransport::new([Reply::Text("summary text")]);
    let mut ws = workspace(&transport);
    let id = ws.add_article(article("X", "Y")).unwrap().id;
    assert_eq!(ws.site(Site::Summary), &RequestState::Idle);

    let state = ws.summarize_article(&id).await.unwrap();
    assert_eq!(state, &RequestState::Succeeded("summary text".to_string()));
    assert_eq!(ws.article(&id).unwrap().summary.as_deref(), Some("summary text"));
    assert!(transport.last_prompt().ends_with("\n\nY"));

    let stored = ws.state().store().get("articles").unwrap().unwrap();
    assert!(stored.contains("\"summary\":\"summary text\""));
}

#[tokio::test]
async fn summary_without_text_fails_before_calling() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    let id = ws.add_article(article("Only a title", "")).unwrap().id;

    let err = ws.summarize_article(&id).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::Validation(ref m)) if m.contains("não possui texto suficiente")
    ));
    assert_eq!(transport.calls(), 0);
    assert_eq!(ws.site(Site::Summary), &RequestState::Idle);
}

#[tokio::test]
async fn summary_uses_notes_when_abstract_is_blank() {
    let transport = ScriptedTransport::new([Reply::Text("ok")]);
    let mut ws = workspace(&transport);
    let draft = ArticleDraft {
        notes: Some("minhas notas".to_string()),
        ..article("T", "  ")
    };
    let id = ws.add_article(draft).unwrap().id;
    ws.summarize_article(&id).await.unwrap();
    assert!(transport.last_prompt().ends_with("\n\nminhas notas"));
}

#[tokio::test]
async fn summary_failure_keeps_article_and_records_message() {
    let transport = ScriptedTransport::new([Reply::Fail(503)]);
    let mut ws = workspace(&transport);
    let id = ws.add_article(article("X", "Y")).unwrap().id;

    let state = ws.summarize_article(&id).await.unwrap();
    assert_eq!(
        state.error(),
        Some("Falha ao gerar o resumo. Tente novamente.")
    );
    assert_eq!(ws.article(&id).unwrap().summary, None);
}

#[tokio::test]
async fn repeated_summary_keeps_latest_payload() {
    let transport = ScriptedTransport::new([Reply::Text("first"), Reply::Text("second")]);
    let mut ws = workspace(&transport);
    let id = ws.add_article(article("X", "Y")).unwrap().id;

    ws.summarize_article(&id).await.unwrap();
    let state = ws.summarize_article(&id).await.unwrap();
    assert_eq!(state, &RequestState::Succeeded("second".to_string()));
    assert_eq!(ws.article(&id).unwrap().summary.as_deref(), Some("second"));
}

#[tokio::test]
async fn summary_that_cannot_be_stored_is_recorded_as_failed() {
    let transport = ScriptedTransport::new([Reply::Text("lost summary")]);
    let mut ws = workspace_with(&transport, BrittleStore::default());
    let id = ws.add_article(article("X", "Y")).unwrap().id;
    ws.state().store().break_writes();

    let err = ws.summarize_article(&id).await.unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert_eq!(transport.calls(), 1);
    assert_eq!(
        ws.site(Site::Summary).error(),
        Some("Falha ao gerar o resumo. Tente novamente.")
    );
    assert_eq!(ws.article(&id).unwrap().summary, None);
}

#[tokio::test]
async fn summarize_unknown_article_is_not_found() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    let err = ws.summarize_article("art-missing").await.unwrap_err();
    assert!(matches!(err, StoreError::Core(CoreError::NotFound { .. })));
}

// ── Articles and references ────────────────────────────────────────

#[test]
fn edit_keeps_summary_and_delete_removes() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    let id = ws.add_article(article("Old", "A")).unwrap().id;

    let edited = ws.edit_article(&id, article("New", "B")).unwrap();
    assert_eq!(edited.id, id);
    assert_eq!(ws.article(&id).unwrap().title, "New");

    ws.delete_article(&id).unwrap();
    assert!(ws.articles().is_empty());
    assert!(ws.delete_article(&id).is_err());
}

#[test]
fn blank_title_is_rejected_and_nothing_persisted() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    assert!(ws.add_article(article("  ", "A")).is_err());
    assert_eq!(ws.state().store().get("articles").unwrap(), None);
}

#[test]
fn bibliography_uses_stored_style_unless_overridden() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    ws.add_reference(ReferenceDraft {
        authors: "Silva, J.".to_string(),
        year: "2020".to_string(),
        title: "T".to_string(),
        source: "S".to_string(),
        ..ReferenceDraft::default()
    })
    .unwrap();

    assert_eq!(ws.bibliography(None), "Silva, J. (2020). T. S.");
    ws.set_citation_style(CitationStyle::Abnt).unwrap();
    assert!(ws.bibliography(None).starts_with("SILVA, J."));
    assert!(ws.bibliography(Some(CitationStyle::Apa)).starts_with("Silva, J. (2020)"));
}

// ── Tasks and goals ────────────────────────────────────────────────

fn task(description: &str, due: Option<&str>) -> TaskDraft {
    TaskDraft {
        description: description.to_string(),
        due_date: due.map(date),
        project_id: None,
    }
}

#[test]
fn tasks_are_kept_in_due_date_order() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    ws.add_task(task("later", Some("2024-06-01"))).unwrap();
    ws.add_task(task("undated", None)).unwrap();
    ws.add_task(task("sooner", Some("2024-01-01"))).unwrap();

    let order: Vec<_> = ws.tasks().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(order, vec!["sooner", "undated", "later"]);
}

#[test]
fn tasks_with_blank_due_dates_survive_the_next_save() {
    let store = MemoryStore::new();
    store
        .set(
            "tasks",
            r#"[{"id":"1","description":"keep me","dueDate":"","isCompleted":false},
                {"id":"2","description":"dated","dueDate":"2024-01-01","isCompleted":false}]"#,
        )
        .unwrap();
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace_with(&transport, store);
    assert_eq!(ws.tasks().len(), 2);

    ws.add_task(task("new", None)).unwrap();
    assert_eq!(ws.tasks().len(), 3);
    let stored = ws.state().store().get("tasks").unwrap().unwrap();
    assert!(stored.contains("keep me"));
    assert!(stored.contains("2024-01-01"));
}

#[test]
fn editing_a_due_date_reorders() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    let a = ws.add_task(task("a", Some("2024-01-01"))).unwrap().id;
    ws.add_task(task("b", Some("2024-02-01"))).unwrap();

    ws.edit_task(&a, task("a", Some("2024-03-01"))).unwrap();
    let order: Vec<_> = ws.tasks().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
}

#[test]
fn toggles_flip_and_persist() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    let t = ws.add_task(task("t", None)).unwrap().id;
    let g = ws
        .add_goal(GoalDraft {
            description: "publish".to_string(),
        })
        .unwrap()
        .id;

    assert!(ws.toggle_task(&t).unwrap().is_completed);
    assert!(!ws.toggle_task(&t).unwrap().is_completed);
    assert!(ws.toggle_goal(&g).unwrap().is_achieved);

    let stored = ws.state().store().get("goals").unwrap().unwrap();
    assert!(stored.contains("\"isAchieved\":true"));
}

#[test]
fn dashboard_lists_first_three_of_each() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    for title in ["a", "b", "c", "d"] {
        ws.add_article(article(title, "")).unwrap();
    }
    let done = ws.add_task(task("done", None)).unwrap().id;
    ws.toggle_task(&done).unwrap();
    for d in ["t1", "t2", "t3", "t4"] {
        ws.add_task(task(d, None)).unwrap();
    }

    let dashboard = ws.dashboard();
    let titles: Vec<_> = dashboard.recent_articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
    let tasks: Vec<_> = dashboard.upcoming_tasks.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(tasks, vec!["t1", "t2", "t3"]);
    assert_eq!(dashboard.pending_task_count, 4);
    assert_eq!(dashboard.article_count, 4);
    assert!(dashboard.active_goals.is_empty());
}

// ── Writing helpers and prompts ────────────────────────────────────

#[tokio::test]
async fn writing_helpers_use_their_own_sites_and_messages() {
    let transport = ScriptedTransport::new([Reply::Text("outline"), Reply::Fail(500)]);
    let mut ws = workspace(&transport);

    let state = ws.section_template("methodology_experimental").await;
    assert_eq!(state.payload().map(String::as_str), Some("outline"));
    assert!(transport.last_prompt().contains("Metodologia (Estudo Experimental)"));

    let state = ws.suggest_phrases("connecting_ideas").await;
    assert_eq!(state.error(), Some("Falha ao sugerir frases. Tente novamente."));
    assert!(ws.site(Site::Template).payload().is_some());
}

#[tokio::test]
async fn blank_review_text_is_rejected() {
    let transport = ScriptedTransport::new([]);
    let mut ws = workspace(&transport);
    let err = ws.review_text("   ").await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::Validation(ref m)) if m == "Por favor, insira o texto para revisão."
    ));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn summary_task_is_refused_outside_its_article() {
    let transport = ScriptedTransport::new([Reply::Text("orphan")]);
    let mut ws = workspace(&transport);

    let err = ws.write(PromptTask::SummarizeArticle("Y")).await.unwrap_err();
    assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
    let err = ws
        .write_streaming(PromptTask::SummarizeArticle("Y"), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
    assert_eq!(transport.calls(), 0);
    assert_eq!(ws.site(Site::Summary), &RequestState::Idle);
}

#[tokio::test]
async fn guide_failure_names_style() {
    let transport = ScriptedTransport::new([Reply::Fail(500)]);
    let mut ws = workspace(&transport);
    let state = ws.formatting_guide(Some(CitationStyle::Abnt)).await;
    assert_eq!(
        state.error(),
        Some("Falha ao carregar o guia de formatação para ABNT. Tente novamente.")
    );
}

#[tokio::test]
async fn streamed_review_accumulates_chunks() {
    let transport = ScriptedTransport::new([Reply::Chunks(vec!["Texto ", "revisado", "."])]);
    let mut ws = workspace(&transport);
    let mut seen = Vec::new();
    let state = ws
        .write_streaming(PromptTask::ReviewText("texto"), |chunk| {
            seen.push(chunk.to_string());
        })
        .await
        .unwrap();
    assert_eq!(state.payload().map(String::as_str), Some("Texto revisado."));
    assert_eq!(seen, vec!["Texto ", "revisado", "."]);
}

#[tokio::test]
async fn free_prompt_failure_records_error_text() {
    let transport = ScriptedTransport::new([Reply::Fail(429)]);
    let mut ws = workspace(&transport);
    let state = ws.ask("Olá", None).await.unwrap();
    assert!(state.error().unwrap().contains("429"));
}

#[tokio::test]
async fn json_prompt_returns_parsed_value() {
    let transport = ScriptedTransport::new([Reply::Text("```json\n{\"ok\": true}\n```")]);
    let ws = workspace(&transport);
    let value = ws.ask_json("responda em JSON", None).await.unwrap();
    assert_eq!(value["ok"], true);
}
