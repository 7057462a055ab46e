//! Static recommendation table keyed by pace category.

use crate::model::{
    ContentType, ExtraResources, PaceCategory, PracticeExercises, RecommendationBundle,
    SessionDuration,
};

pub const SLOW_BUNDLE: RecommendationBundle = RecommendationBundle {
    content_type: ContentType::Detailed,
    extra_resources: ExtraResources::Included,
    practice_exercises: PracticeExercises::More,
    session_duration: SessionDuration::from_minutes(30),
};

pub const MEDIUM_BUNDLE: RecommendationBundle = RecommendationBundle {
    content_type: ContentType::Balanced,
    extra_resources: ExtraResources::Optional,
    practice_exercises: PracticeExercises::Standard,
    session_duration: SessionDuration::from_minutes(45),
};

pub const FAST_BUNDLE: RecommendationBundle = RecommendationBundle {
    content_type: ContentType::Advanced,
    extra_resources: ExtraResources::Excluded,
    practice_exercises: PracticeExercises::Challenging,
    session_duration: SessionDuration::from_minutes(60),
};

/// Look up the bundle for a pace category.
pub fn recommend(category: PaceCategory) -> &'static RecommendationBundle {
    match category {
        PaceCategory::Slow => &SLOW_BUNDLE,
        PaceCategory::Medium => &MEDIUM_BUNDLE,
        PaceCategory::Fast => &FAST_BUNDLE,
    }
}

/// Look up a bundle by category label. Unrecognized labels get the medium bundle.
pub fn recommend_label(label: &str) -> &'static RecommendationBundle {
    match label.parse::<PaceCategory>() {
        Ok(category) => recommend(category),
        Err(e) => {
            tracing::warn!("{e}, falling back to medium recommendations");
            &MEDIUM_BUNDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_bundle() {
        let bundle = recommend(PaceCategory::Slow);
        assert_eq!(bundle.content_type, ContentType::Detailed);
        assert_eq!(bundle.extra_resources, ExtraResources::Included);
        assert_eq!(bundle.practice_exercises, PracticeExercises::More);
        assert_eq!(bundle.session_duration.to_string(), "30 min");
    }

    #[test]
    fn medium_bundle() {
        let bundle = recommend(PaceCategory::Medium);
        assert_eq!(bundle.content_type, ContentType::Balanced);
        assert_eq!(bundle.extra_resources, ExtraResources::Optional);
        assert_eq!(bundle.practice_exercises, PracticeExercises::Standard);
        assert_eq!(bundle.session_duration.minutes(), 45);
    }

    #[test]
    fn fast_bundle() {
        let bundle = recommend(PaceCategory::Fast);
        assert_eq!(bundle.content_type, ContentType::Advanced);
        assert_eq!(bundle.extra_resources, ExtraResources::Excluded);
        assert_eq!(bundle.practice_exercises, PracticeExercises::Challenging);
        assert_eq!(bundle.session_duration.to_string(), "60 min");
    }

    #[test]
    fn fast_bundle_json_shape() {
        let json = serde_json::to_value(recommend(PaceCategory::Fast)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content_type": "advanced",
                "extra_resources": false,
                "practice_exercises": "challenging",
                "session_duration": "60 min"
            })
        );
    }

    #[test]
    fn known_labels() {
        assert_eq!(recommend_label("slow"), &SLOW_BUNDLE);
        assert_eq!(recommend_label("Fast"), &FAST_BUNDLE);
    }

    #[test]
    fn unknown_label_falls_back_to_medium() {
        assert_eq!(recommend_label("garbage"), &MEDIUM_BUNDLE);
        assert_eq!(recommend_label(""), &MEDIUM_BUNDLE);
    }
}
