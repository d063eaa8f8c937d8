//! Obstacle pairs and the field that spawns, scrolls and reaps them

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::sprite::Sprite;
use crate::assets::ImageKey;
use crate::consts::{FINISH_LINE_WIDTH, FINISH_LINE_X};
use crate::tuning::Tuning;

/// How new obstacles enter the field. A session picks one and keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// One pair at the right edge every spawn interval, random gap
    #[default]
    Timed,
    /// The fixed hand-authored course, laid out in full up front
    Course,
}

impl SpawnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Timed => "Timed",
            SpawnPolicy::Course => "Course",
        }
    }

}

/// One pair of the scripted course
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseEntry {
    pub x: f32,
    pub gap_top: f32,
    pub gap_height: f32,
}

const fn entry(x: f32, gap_top: f32, gap_height: f32) -> CourseEntry {
    CourseEntry { x, gap_top, gap_height }
}

/// Gaps narrow as the course goes on
pub const COURSE: [CourseEntry; 13] = [
    entry(500.0, 100.0, 140.0),
    entry(800.0, 50.0, 140.0),
    entry(1000.0, 250.0, 140.0),
    entry(1200.0, 150.0, 120.0),
    entry(1600.0, 100.0, 120.0),
    entry(1800.0, 150.0, 120.0),
    entry(2000.0, 200.0, 120.0),
    entry(2200.0, 250.0, 120.0),
    entry(2400.0, 30.0, 100.0),
    entry(2700.0, 300.0, 100.0),
    entry(3000.0, 100.0, 80.0),
    entry(3300.0, 250.0, 80.0),
    entry(3600.0, 50.0, 60.0),
];

/// Top and bottom piece around a vertical gap
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub id: u32,
    pub top: Sprite,
    pub bottom: Sprite,
    pub gap_top: f32,
    pub gap_height: f32,
    /// Set once the player has cleared this pair
    pub passed: bool,
}

impl ObstaclePair {
    pub fn new(id: u32, x: f32, gap_top: f32, gap_height: f32, tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.pipe_width, tuning.pipe_height);
        let vel = Vec2::new(tuning.pipe_speed, 0.0);

        let mut top = Sprite::new(
            Some(ImageKey::Pipe),
            Vec2::new(x, gap_top - tuning.pipe_height),
            size,
        );
        top.vel = vel;

        let mut bottom = Sprite::new(Some(ImageKey::Pipe), Vec2::new(x, gap_top + gap_height), size);
        bottom.vel = vel;
        bottom.flip_v = true;

        Self {
            id,
            top,
            bottom,
            gap_top,
            gap_height,
            passed: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.top.pos.x
    }

    pub fn right(&self) -> f32 {
        self.top.right()
    }

    pub fn advance(&mut self) {
        self.top.advance();
        self.bottom.advance();
    }

    /// Fully past the left edge of the play area
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }

    pub fn sprites(&self) -> [&Sprite; 2] {
        [&self.top, &self.bottom]
    }
}

/// Uniform gap position that keeps the whole gap on screen
pub fn random_gap_top(rng: &mut impl Rng, play_height: f32, gap_height: f32) -> f32 {
    rng.random::<f32>() * (play_height - gap_height)
}

/// The active obstacle set
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub policy: SpawnPolicy,
    pairs: Vec<ObstaclePair>,
    /// End-of-course marker; never collides
    finish: Option<Sprite>,
    course_complete: bool,
    rng: Pcg32,
    next_spawn_at: Option<f64>,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(policy: SpawnPolicy, seed: u64, tuning: &Tuning) -> Self {
        let mut field = Self {
            policy,
            pairs: Vec::new(),
            finish: None,
            course_complete: false,
            rng: Pcg32::seed_from_u64(seed),
            next_spawn_at: None,
            next_id: 1,
        };
        field.reset(tuning);
        field
    }

    /// Fresh game: session-start layout with the completion latch cleared
    pub fn reset(&mut self, tuning: &Tuning) {
        self.course_complete = false;
        self.rewind(tuning);
    }

    /// Return to the session-start layout: empty for timed play, the full
    /// course for scripted play. A course already finished stays finished.
    pub fn rewind(&mut self, tuning: &Tuning) {
        self.pairs.clear();
        self.finish = None;
        self.next_spawn_at = None;

        if self.policy == SpawnPolicy::Course {
            for e in COURSE {
                self.spawn_pair(e.x, e.gap_top, e.gap_height, tuning);
            }
            let mut finish = Sprite::new(
                Some(ImageKey::FinishLine),
                Vec2::new(FINISH_LINE_X, 0.0),
                Vec2::new(FINISH_LINE_WIDTH, tuning.play_height),
            );
            finish.vel = Vec2::new(tuning.pipe_speed, 0.0);
            self.finish = Some(finish);
        }
    }

    pub fn spawn_pair(&mut self, x: f32, gap_top: f32, gap_height: f32, tuning: &Tuning) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.pairs.push(ObstaclePair::new(id, x, gap_top, gap_height, tuning));
        id
    }

    /// Spawn at the right edge with a random gap
    pub fn spawn_random(&mut self, tuning: &Tuning) -> u32 {
        let gap_top = random_gap_top(&mut self.rng, tuning.play_height, tuning.gap_height);
        self.spawn_pair(tuning.play_width, gap_top, tuning.gap_height, tuning)
    }

    /// Timed policy: spawn when the interval has elapsed. The first call
    /// after a reset only starts the clock.
    pub fn spawn_due(&mut self, now: f64, tuning: &Tuning) -> Option<u32> {
        if self.policy != SpawnPolicy::Timed {
            return None;
        }
        match self.next_spawn_at {
            None => {
                self.next_spawn_at = Some(now + tuning.spawn_interval_ms);
                None
            }
            Some(due) if now >= due => {
                self.next_spawn_at = Some(now + tuning.spawn_interval_ms);
                Some(self.spawn_random(tuning))
            }
            Some(_) => None,
        }
    }

    pub fn advance(&mut self) {
        for pair in &mut self.pairs {
            pair.advance();
        }
        if let Some(finish) = &mut self.finish {
            finish.advance();
        }
    }

    /// Drop everything that scrolled off the left edge
    pub fn reap(&mut self) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|p| !p.is_off_screen());
        if self.finish.as_ref().is_some_and(|f| f.right() <= 0.0) {
            self.finish = None;
        }
        before - self.pairs.len()
    }

    /// Mark pairs the player has cleared; returns how many were newly passed
    pub fn collect_passed(&mut self, player_left: f32) -> u32 {
        let mut count = 0;
        for pair in &mut self.pairs {
            if !pair.passed && pair.right() < player_left {
                pair.passed = true;
                count += 1;
            }
        }
        count
    }

    /// True exactly once, on the tick the finish line reaches the player
    pub fn check_finish(&mut self, player_left: f32) -> bool {
        if self.course_complete {
            return false;
        }
        if self.finish.as_ref().is_some_and(|f| f.pos.x < player_left) {
            self.course_complete = true;
            return true;
        }
        false
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn finish(&self) -> Option<&Sprite> {
        self.finish.as_ref()
    }

    pub fn is_course_complete(&self) -> bool {
        self.course_complete
    }

    /// Every drawable sprite, pairs first then the finish marker
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| p.sprites())
            .chain(self.finish.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pair_geometry_around_gap() {
        let tuning = Tuning::default();
        let pair = ObstaclePair::new(1, 500.0, 200.0, 150.0, &tuning);
        assert_eq!(pair.top.bounding_box().bottom, 200.0);
        assert_eq!(pair.top.bounding_box().top, -100.0);
        assert_eq!(pair.bottom.bounding_box().top, 350.0);
        assert_eq!(pair.bottom.bounding_box().bottom, 650.0);
        assert!(pair.bottom.flip_v);
        assert!(!pair.top.flip_v);
        assert_eq!(pair.top.vel.x, tuning.pipe_speed);
    }

    #[test]
    fn test_pair_scrolls_to_zero_after_250_ticks_then_reaped() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Timed, 7, &tuning);
        field.spawn_pair(500.0, 200.0, 150.0, &tuning);

        for _ in 0..250 {
            field.advance();
            assert_eq!(field.reap(), 0);
        }
        assert_eq!(field.pairs()[0].x(), 0.0);

        // Still visible until its right edge crosses zero
        for _ in 0..24 {
            field.advance();
            assert_eq!(field.reap(), 0);
        }
        field.advance();
        assert_eq!(field.pairs()[0].right(), 0.0);
        assert_eq!(field.reap(), 1);
        assert!(field.pairs().is_empty());
    }

    #[test]
    fn test_timed_spawn_waits_one_interval() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Timed, 1, &tuning);
        assert!(field.pairs().is_empty());

        assert_eq!(field.spawn_due(0.0, &tuning), None);
        assert_eq!(field.spawn_due(1999.0, &tuning), None);
        let id = field.spawn_due(2000.0, &tuning).expect("spawn after interval");
        assert_eq!(field.pairs().len(), 1);
        assert_eq!(field.pairs()[0].id, id);
        assert_eq!(field.pairs()[0].x(), tuning.play_width);
        assert_eq!(field.spawn_due(2100.0, &tuning), None);
        assert!(field.spawn_due(4000.0, &tuning).is_some());
        assert_eq!(field.pairs().len(), 2);
    }

    #[test]
    fn test_course_lays_out_full_table_and_finish() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Course, 1, &tuning);
        assert_eq!(field.pairs().len(), COURSE.len());
        assert_eq!(field.pairs()[0].x(), 500.0);
        assert_eq!(field.pairs()[12].gap_height, 60.0);
        assert_eq!(field.finish().map(|f| f.pos.x), Some(FINISH_LINE_X));
        assert_eq!(field.sprites().count(), COURSE.len() * 2 + 1);
        // Course never spawns on a timer
        assert_eq!(field.spawn_due(0.0, &tuning), None);
        assert_eq!(field.spawn_due(10_000.0, &tuning), None);
        assert_eq!(field.pairs().len(), COURSE.len());
    }

    #[test]
    fn test_reset_rewinds_course() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Course, 1, &tuning);
        for _ in 0..400 {
            field.advance();
            field.reap();
        }
        // First pair reaped; the 800 pair has scrolled to the left edge
        assert_eq!(field.pairs()[0].x(), 0.0);
        field.reset(&tuning);
        assert_eq!(field.pairs()[0].x(), 500.0);
        assert!(field.pairs().iter().all(|p| !p.passed));
    }

    #[test]
    fn test_passed_counted_once() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Timed, 1, &tuning);
        field.spawn_pair(100.0, 200.0, 150.0, &tuning);
        assert_eq!(field.collect_passed(166.0), 1);
        assert_eq!(field.collect_passed(166.0), 0);
        assert!(field.pairs()[0].passed);
    }

    #[test]
    fn test_finish_reported_once() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Course, 1, &tuning);
        let player_left = tuning.player_x();
        let mut reported = 0;
        for _ in 0..2000 {
            field.advance();
            if field.check_finish(player_left) {
                reported += 1;
            }
            field.reap();
        }
        assert_eq!(reported, 1);
        assert!(field.is_course_complete());
        assert!(field.finish().is_none());
    }

    #[test]
    fn test_rewind_keeps_completion_but_reset_clears_it() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new(SpawnPolicy::Course, 1, &tuning);
        let player_left = tuning.player_x();
        while !field.check_finish(player_left) {
            field.advance();
        }

        field.rewind(&tuning);
        assert!(field.is_course_complete());
        assert_eq!(field.pairs().len(), COURSE.len());
        for _ in 0..2000 {
            field.advance();
            assert!(!field.check_finish(player_left));
        }

        field.reset(&tuning);
        assert!(!field.is_course_complete());
    }

    proptest! {
        #[test]
        fn prop_random_spawn_brackets_gap(seed in any::<u64>(), spawns in 1usize..20) {
            let tuning = Tuning::default();
            let mut field = ObstacleField::new(SpawnPolicy::Timed, seed, &tuning);
            for _ in 0..spawns {
                field.spawn_random(&tuning);
            }
            for pair in field.pairs() {
                prop_assert!(pair.gap_top >= 0.0);
                prop_assert!(pair.gap_top + pair.gap_height <= tuning.play_height);
                prop_assert!((pair.top.bounding_box().bottom - pair.gap_top).abs() < 1e-3);
                prop_assert_eq!(pair.bottom.bounding_box().top, pair.gap_top + 150.0);
            }
        }
    }
}
