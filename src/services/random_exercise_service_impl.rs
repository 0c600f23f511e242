//! `SeaORM` implementation of the `RandomExerciseService` trait.

use async_trait::async_trait;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::db::Store;
use crate::services::random_exercise_service::{
    ExerciseDto, RandomExerciseError, RandomExerciseService,
};

pub struct SeaOrmRandomExerciseService {
    store: Store,
}

impl SeaOrmRandomExerciseService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RandomExerciseService for SeaOrmRandomExerciseService {
    async fn list_all(&self) -> Result<Vec<ExerciseDto>, RandomExerciseError> {
        let exercises = self.store.list_random_exercises().await?;
        Ok(exercises.into_iter().map(ExerciseDto::from).collect())
    }

    async fn pick_one(&self) -> Result<ExerciseDto, RandomExerciseError> {
        let exercises = self.store.list_random_exercises().await?;

        // ThreadRng is not Send; keep it scoped so it never crosses an await
        let picked = {
            let mut rng = rand::rng();
            exercises.choose(&mut rng).cloned()
        };

        picked.map(ExerciseDto::from).ok_or(RandomExerciseError::Empty)
    }

    async fn pick_many(&self, count: i32) -> Result<Vec<ExerciseDto>, RandomExerciseError> {
        if count <= 0 {
            return Err(RandomExerciseError::InvalidCount);
        }

        let mut exercises = self.store.list_random_exercises().await?;

        {
            let mut rng = rand::rng();
            exercises.shuffle(&mut rng);
        }

        #[allow(clippy::cast_sign_loss)]
        exercises.truncate(count as usize);

        Ok(exercises.into_iter().map(ExerciseDto::from).collect())
    }
}
