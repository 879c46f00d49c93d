#![allow(dead_code)]

use std::{
    collections::VecDeque,
    io::Cursor,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use eatup_core::{
    domain::{
        analysis::ports::AnalysisClient,
        common::{calendar::Calendar, entities::app_errors::CoreError, services::Service},
        meal::{entities::MealType, value_objects::LogMealInput},
        profile::{
            entities::{MacroTargets, Profile},
            ports::ProfileRepository,
        },
    },
    infrastructure::{
        memory::{FixedClock, InMemoryStore},
        object_storage::{InMemoryObjectStorage, ObjectMealImageStore},
    },
};
use image::{ImageFormat, Rgb, RgbImage};
use uuid::Uuid;

pub type TestService = Service<
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    ScriptedAnalysisClient,
    ObjectMealImageStore<InMemoryObjectStorage>,
    FixedClock,
>;

/// Answers analysis calls from a queue, in order.
#[derive(Clone, Default)]
pub struct ScriptedAnalysisClient {
    replies: Arc<Mutex<VecDeque<Result<String, CoreError>>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedAnalysisClient {
    pub fn push(&self, reply: Result<String, CoreError>) {
        self.replies
            .lock()
            .expect("reply queue poisoned")
            .push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalysisClient for ScriptedAnalysisClient {
    async fn analyze_meal_image(&self, _prompt: String, _image: Bytes) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .expect("reply queue poisoned")
            .pop_front()
            .unwrap_or(Err(CoreError::EmptyResponse))
    }
}

pub struct Harness {
    pub service: TestService,
    pub store: InMemoryStore,
    pub objects: InMemoryObjectStorage,
    pub client: ScriptedAnalysisClient,
    pub clock: FixedClock,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_objects(InMemoryObjectStorage::new())
    }

    pub fn with_objects(objects: InMemoryObjectStorage) -> Self {
        let store = InMemoryStore::new();
        let client = ScriptedAnalysisClient::default();
        let clock = FixedClock::new(wednesday_morning());

        let service = Service::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            client.clone(),
            ObjectMealImageStore::new(objects.clone()),
            clock.clone(),
            Calendar::utc(),
        );

        Self {
            service,
            store,
            objects,
            client,
            clock,
        }
    }

    pub async fn with_profile(self, user_id: Uuid) -> Self {
        self.store
            .upsert_profile(profile(user_id))
            .await
            .expect("profile saved");
        self
    }
}

/// 2025-11-12 08:00 UTC, a Wednesday in ISO week 46
pub fn wednesday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 12, 8, 0, 0).unwrap()
}

pub fn profile(user_id: Uuid) -> Profile {
    Profile {
        user_id,
        age: 34,
        weight: 165.0,
        height: 68.0,
        gender: Some("female".to_string()),
        activity_level: "moderate".to_string(),
        dietary_restrictions: "none".to_string(),
        health_goal: "maintain weight".to_string(),
        macro_targets: Some(MacroTargets {
            protein: 120.0,
            carbs: 200.0,
            fat: 60.0,
        }),
    }
}

pub fn photo() -> Bytes {
    let image = RgbImage::from_pixel(32, 24, Rgb([200, 120, 40]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("png encoded");
    Bytes::from(buffer.into_inner())
}

pub fn upload(user_id: Uuid, meal_type: MealType) -> LogMealInput {
    LogMealInput {
        user_id,
        image: photo(),
        description: Some("eggs and toast".to_string()),
        meal_type,
    }
}

/// Model answer with string-typed numbers, as the model often returns them
pub fn analysis_reply(health_score: f64) -> String {
    format!(
        r#"```json
{{
  "protein": "20", "carbs": "30", "fat": "10", "fiber": "4", "sugar": "6", "sodium": "0.4",
  "foodItems": ["eggs", "toast"],
  "healthScore": {health_score}, "portionQualityScore": 7, "varietyScore": 6, "nutritionBalanceScore": 8,
  "recommendations": "Add some fruit."
}}
```"#
    )
}
