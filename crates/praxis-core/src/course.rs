//! Course parameter model.
//!
//! `CourseParams` is the value object handed to the registration workflow by
//! the admin approval process. It is validated once at the workflow boundary
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::errors::{PraxisError, PraxisResult};

/// Maximum byte length of a course id.
///
/// Course ids are used verbatim as PDA seed bytes, and the chain caps a
/// single seed at 32 bytes.
pub const MAX_COURSE_ID_BYTES: usize = 32;

/// Parameters describing a course to be registered on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseParams {
    /// Stable course identifier (e.g. "intro-rust-101").
    pub course_id: String,
    pub lesson_count: u8,
    pub difficulty: u8,
    /// XP granted to a learner per completed lesson.
    pub xp_per_lesson: u32,
    pub track_id: u16,
    pub track_level: u8,
}

impl CourseParams {
    /// Validate the parameter set before any derivation or network work.
    pub fn validate(&self) -> PraxisResult<()> {
        if self.course_id.is_empty() {
            return Err(PraxisError::invalid_argument("course id must not be empty"));
        }
        if self.course_id.len() > MAX_COURSE_ID_BYTES {
            return Err(PraxisError::invalid_argument(format!(
                "course id exceeds {MAX_COURSE_ID_BYTES} bytes: got {}",
                self.course_id.len()
            )));
        }
        self.creator_reward_xp()?;
        Ok(())
    }

    /// Total XP granted to the creator: `lesson_count * xp_per_lesson`.
    ///
    /// The on-chain field is u32; the product must fit.
    pub fn creator_reward_xp(&self) -> PraxisResult<u32> {
        u32::from(self.lesson_count)
            .checked_mul(self.xp_per_lesson)
            .ok_or_else(|| {
                PraxisError::overflow(format!(
                    "creator reward {} lessons * {} xp exceeds u32",
                    self.lesson_count, self.xp_per_lesson
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn params(course_id: &str, lesson_count: u8, xp_per_lesson: u32) -> CourseParams {
        CourseParams {
            course_id: course_id.to_string(),
            lesson_count,
            difficulty: 2,
            xp_per_lesson,
            track_id: 1,
            track_level: 1,
        }
    }

    #[test]
    fn valid_params_pass() {
        params("intro-rust-101", 10, 50).validate().unwrap();
    }

    #[test]
    fn empty_id_rejected() {
        let err = params("", 10, 50).validate().unwrap_err();
        assert_matches!(err, PraxisError::InvalidArgument(_));
    }

    #[test]
    fn over_long_id_rejected() {
        let id = "x".repeat(MAX_COURSE_ID_BYTES + 1);
        let err = params(&id, 10, 50).validate().unwrap_err();
        assert_matches!(err, PraxisError::InvalidArgument(_));
    }

    #[test]
    fn id_at_seed_limit_accepted() {
        let id = "x".repeat(MAX_COURSE_ID_BYTES);
        params(&id, 10, 50).validate().unwrap();
    }

    #[test]
    fn creator_reward_is_product() {
        assert_eq!(params("intro-rust-101", 10, 50).creator_reward_xp().unwrap(), 500);
    }

    #[test]
    fn params_serde_round_trip() {
        let p = params("intro-rust-101", 10, 50);
        let json = serde_json::to_string(&p).unwrap();
        let back: CourseParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn creator_reward_overflow_rejected() {
        let err = params("intro-rust-101", 255, u32::MAX).creator_reward_xp().unwrap_err();
        assert_matches!(err, PraxisError::Overflow(_));
    }

    proptest! {
        #[test]
        fn reward_matches_wide_product(lesson_count: u8, xp_per_lesson: u32) {
            let expected = u64::from(lesson_count) * u64::from(xp_per_lesson);
            match params("any-course", lesson_count, xp_per_lesson).creator_reward_xp() {
                Ok(r) => prop_assert_eq!(u64::from(r), expected),
                Err(PraxisError::Overflow(_)) => prop_assert!(expected > u64::from(u32::MAX)),
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }
    }
}
