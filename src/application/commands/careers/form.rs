// src/application/commands/careers/form.rs
use crate::{
    application::{
        commands::workflow::{CreateStamp, Submission, UpdateStamp},
        error::ValidationErrors,
    },
    domain::{
        career::{Career, CareerTitle, CareerUpdate, NewCareer},
        shared::LongText,
    },
};

/// Raw career form input; every field is required on both create and update.
#[derive(Debug, Clone, Default)]
pub struct CareerFields {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub how_to_apply: String,
}

#[derive(Debug, Clone)]
pub struct ValidCareer {
    pub title: CareerTitle,
    pub description: LongText,
    pub requirements: LongText,
    pub benefits: LongText,
    pub how_to_apply: LongText,
}

impl CareerFields {
    pub fn validate(self) -> Result<ValidCareer, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = errors.check("title", CareerTitle::new(self.title));
        let description = errors.check(
            "description",
            LongText::labelled(self.description, "description"),
        );
        let requirements = errors.check(
            "requirements",
            LongText::labelled(self.requirements, "requirements"),
        );
        let benefits = errors.check("benefits", LongText::labelled(self.benefits, "benefits"));
        let how_to_apply = errors.check(
            "how_to_apply",
            LongText::labelled(self.how_to_apply, "how_to_apply"),
        );

        match (title, description, requirements, benefits, how_to_apply) {
            (
                Some(title),
                Some(description),
                Some(requirements),
                Some(benefits),
                Some(how_to_apply),
            ) => Ok(ValidCareer {
                title,
                description,
                requirements,
                benefits,
                how_to_apply,
            }),
            _ => Err(errors),
        }
    }
}

impl Submission for ValidCareer {
    type Target = Career;

    fn slug_source(&self) -> &str {
        self.title.as_str()
    }

    fn into_draft(self, stamp: CreateStamp) -> NewCareer {
        NewCareer {
            title: self.title,
            slug: stamp.slug,
            cover: stamp.cover,
            description: self.description,
            requirements: self.requirements,
            benefits: self.benefits,
            how_to_apply: self.how_to_apply,
            creator_id: stamp.creator_id,
            created_at: stamp.now,
            updated_at: stamp.now,
        }
    }

    fn into_changes(self, stamp: UpdateStamp) -> CareerUpdate {
        CareerUpdate {
            title: self.title,
            slug: stamp.slug,
            cover: stamp.cover,
            description: self.description,
            requirements: self.requirements,
            benefits: self.benefits,
            how_to_apply: self.how_to_apply,
            creator_id: stamp.creator_id,
            updated_at: stamp.now,
        }
    }
}
