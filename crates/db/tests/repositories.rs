//! Integration tests for the repository layer against an in-memory database:
//! - Brick create/update/delete and version bumps
//! - Template usage counting and partial updates
//! - Composition persistence with embedded bricks
//! - Channel ids, updates, and seeding

use lego_core::brick::{BrickMetadata, BrickType, BrickUpdate, NewBrick};
use lego_core::channel::{ChannelStatus, ChannelUpdate, NewChannel};
use lego_core::composition::NewComposition;
use lego_core::template::{NewTemplate, TemplateUpdate};
use lego_db::repositories::{BrickRepo, ChannelRepo, CompositionRepo, TemplateRepo};
use lego_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn pool() -> DbPool {
    let pool = lego_db::create_memory_pool().await.unwrap();
    lego_db::run_migrations(&pool).await.unwrap();
    pool
}

fn new_template(name: &str) -> NewTemplate {
    NewTemplate {
        name: name.to_string(),
        description: "Launch announcement".to_string(),
        bricks: Vec::new(),
        category: "marketing".to_string(),
        is_public: true,
        variables: Vec::new(),
        tags: vec!["launch".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Bricks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_brick_create_and_find() {
    let pool = pool().await;
    let draft = NewBrick::new(BrickType::Cta, "Signup", "Sign up").with_metadata(BrickMetadata {
        button_text: Some("Join".into()),
        link_url: Some("/signup".into()),
        ..Default::default()
    });
    let created = BrickRepo::create(&pool, draft).await.unwrap();
    assert_eq!(created.version, 1);

    let found = BrickRepo::find_by_id(&pool, &created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.button_label(), "Join");
}

#[tokio::test]
async fn test_brick_update_bumps_version() {
    let pool = pool().await;
    let created = BrickRepo::create(&pool, NewBrick::new(BrickType::Text, "Intro", "Hello"))
        .await
        .unwrap();

    let updated = BrickRepo::update(
        &pool,
        &created.id,
        BrickUpdate {
            content: Some("Hello again".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.version, 2);
    assert_eq!(updated.title, "Intro");
    assert!(updated.updated_at >= created.updated_at);

    let reloaded = BrickRepo::find_by_id(&pool, &created.id).await.unwrap().unwrap();
    assert_eq!(reloaded.content, "Hello again");
    assert_eq!(reloaded.version, 2);
}

#[tokio::test]
async fn test_brick_update_missing_returns_none() {
    let pool = pool().await;
    let result = BrickRepo::update(&pool, "missing", BrickUpdate::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_brick_delete() {
    let pool = pool().await;
    let created = BrickRepo::create(&pool, NewBrick::new(BrickType::Quote, "", "Be bold"))
        .await
        .unwrap();
    assert!(BrickRepo::delete(&pool, &created.id).await.unwrap());
    assert!(!BrickRepo::delete(&pool, &created.id).await.unwrap());
    assert_eq!(BrickRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_template_record_use() {
    let pool = pool().await;
    let template = TemplateRepo::create(&pool, new_template("Launch"), "current-user")
        .await
        .unwrap();

    assert_eq!(TemplateRepo::record_use(&pool, &template.id).await.unwrap(), Some(1));
    assert_eq!(TemplateRepo::record_use(&pool, &template.id).await.unwrap(), Some(2));
    assert_eq!(TemplateRepo::record_use(&pool, "missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_template_partial_update() {
    let pool = pool().await;
    let template = TemplateRepo::create(&pool, new_template("Launch"), "current-user")
        .await
        .unwrap();

    let updated = TemplateRepo::update(
        &pool,
        &template.id,
        TemplateUpdate {
            name: Some("Relaunch".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Relaunch");
    assert_eq!(updated.category, "marketing");
    assert!(updated.is_public);
    assert_eq!(updated.tags, ["launch"]);
}

// ---------------------------------------------------------------------------
// Compositions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_composition_round_trip_keeps_brick_order() {
    let pool = pool().await;
    let bricks = vec![
        lego_core::brick::Brick::create(
            NewBrick::new(BrickType::Text, "", "First"),
            lego_core::types::now(),
        ),
        lego_core::brick::Brick::create(
            NewBrick::new(BrickType::Cta, "", "Second"),
            lego_core::types::now(),
        ),
    ];
    let draft = NewComposition {
        name: "Newsletter".into(),
        description: None,
        bricks: bricks.clone(),
        category: "default".into(),
        tags: vec!["weekly".into()],
    };
    let created = CompositionRepo::create(&pool, draft, "current-user").await.unwrap();

    let found = CompositionRepo::find_by_id(&pool, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.bricks, bricks);
    assert_eq!(found.tags, ["weekly"]);
    assert_eq!(CompositionRepo::list(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Channels and seeding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_seed_is_idempotent() {
    let pool = pool().await;
    lego_db::seed::seed_if_empty(&pool).await.unwrap();
    lego_db::seed::seed_if_empty(&pool).await.unwrap();

    assert_eq!(ChannelRepo::count(&pool).await.unwrap(), 5);
    assert_eq!(BrickRepo::count(&pool).await.unwrap(), 3);

    let ids: Vec<String> = ChannelRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, ["wechat", "weibo", "linkedin", "instagram", "email"]);
}

#[tokio::test]
async fn test_custom_channel_ids_skip_taken() {
    let pool = pool().await;
    lego_db::seed::seed_if_empty(&pool).await.unwrap();

    let draft = |name: &str| NewChannel {
        name: name.to_string(),
        description: None,
        config_url: None,
    };
    let first = ChannelRepo::create_custom(&pool, draft("Blog"), "current-user")
        .await
        .unwrap();
    assert_eq!(first.id, "channel-6");
    assert!(first.is_custom);

    let second = ChannelRepo::create_custom(&pool, draft("Forum"), "current-user")
        .await
        .unwrap();
    assert_eq!(second.id, "channel-7");

    ChannelRepo::delete(&pool, &first.id).await.unwrap();
    let third = ChannelRepo::create_custom(&pool, draft("Wiki"), "current-user")
        .await
        .unwrap();
    assert_eq!(third.id, "channel-8");
}

#[tokio::test]
async fn test_concurrent_custom_channels_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("lego.db").display());
    let pool = lego_db::create_pool(&url).await.unwrap();
    lego_db::run_migrations(&pool).await.unwrap();
    lego_db::seed::seed_if_empty(&pool).await.unwrap();

    let tasks: Vec<_> = (0..4)
        .map(|i| {
            let pool = pool.clone();
            tokio::spawn(async move {
                let draft = NewChannel {
                    name: format!("Blog {i}"),
                    description: None,
                    config_url: None,
                };
                ChannelRepo::create_custom(&pool, draft, "current-user").await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().id);
    }
    ids.sort();
    assert_eq!(ids, ["channel-6", "channel-7", "channel-8", "channel-9"]);
    assert_eq!(ChannelRepo::count(&pool).await.unwrap(), 9);
}

#[tokio::test]
async fn test_channel_update_persists_status() {
    let pool = pool().await;
    lego_db::seed::seed_if_empty(&pool).await.unwrap();

    let updated = ChannelRepo::update(
        &pool,
        "weibo",
        ChannelUpdate {
            connected: Some(true),
            api_key: Some("key".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.connected);

    let reloaded = ChannelRepo::find_by_id(&pool, "weibo").await.unwrap().unwrap();
    assert_eq!(reloaded.status, ChannelStatus::Active);
    assert_eq!(reloaded.api_key.as_deref(), Some("key"));
}

#[tokio::test]
async fn test_health_check() {
    let pool = pool().await;
    lego_db::health_check(&pool).await.unwrap();
}
