use crate::{
    domain::profile::entities::{MacroTargets, Profile},
    entity::profiles,
};

impl From<&profiles::Model> for Profile {
    fn from(model: &profiles::Model) -> Self {
        let macro_targets = match (model.protein_target, model.carbs_target, model.fat_target) {
            (Some(protein), Some(carbs), Some(fat)) => Some(MacroTargets {
                protein,
                carbs,
                fat,
            }),
            _ => None,
        };

        Self {
            user_id: model.user_id,
            age: u32::try_from(model.age).unwrap_or(0),
            weight: model.weight,
            height: model.height,
            gender: model.gender.clone(),
            activity_level: model.activity_level.clone(),
            dietary_restrictions: model.dietary_restrictions.clone(),
            health_goal: model.health_goal.clone(),
            macro_targets,
        }
    }
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self::from(&model)
    }
}
