//! Data the builder opens with, so the preview is never blank on first load.

use crate::models::resume::{
    Education, Experience, Hobby, Language, PersonalDetails, Proficiency, ResumeData, Skill,
};

pub fn personal_details() -> PersonalDetails {
    PersonalDetails {
        full_name: "Aminata Ndiaye".into(),
        post_seeking: "Développeuse Full-Stack".into(),
        phone: "+221 77 123 45 67".into(),
        email: "aminata.ndiaye@example.com".into(),
        address: "Dakar, Sénégal".into(),
        description: "Développeuse passionnée avec cinq ans d'expérience dans la conception \
                      d'applications web performantes. J'aime transformer des besoins métier \
                      en produits simples et fiables."
            .into(),
        photo_url: String::new(),
    }
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            job_title: "Développeuse Full-Stack".into(),
            company_name: "Wave Mobile Money".into(),
            start_date: "2022-03-01".into(),
            end_date: String::new(),
            description: "Conception de services de paiement, revue de code et mentorat \
                          de deux développeurs juniors."
                .into(),
        },
        Experience {
            job_title: "Développeuse Front-End".into(),
            company_name: "Sonatel".into(),
            start_date: "2019-09-01".into(),
            end_date: "2022-02-01".into(),
            description: "Refonte de l'espace client et mise en place d'une bibliothèque \
                          de composants partagée."
                .into(),
        },
    ]
}

pub fn educations() -> Vec<Education> {
    vec![
        Education {
            degree: "Master en Génie Logiciel".into(),
            school: "Université Cheikh Anta Diop".into(),
            start_date: "2017-10-01".into(),
            end_date: "2019-07-01".into(),
            description: "Mention bien. Mémoire sur les architectures orientées événements.".into(),
        },
        Education {
            degree: "Licence en Informatique".into(),
            school: "École Supérieure Polytechnique".into(),
            start_date: "2014-10-01".into(),
            end_date: "2017-07-01".into(),
            description: "Algorithmique, bases de données, réseaux.".into(),
        },
    ]
}

pub fn languages() -> Vec<Language> {
    vec![
        Language {
            language: "Français".into(),
            proficiency: Proficiency::Advanced,
        },
        Language {
            language: "Anglais".into(),
            proficiency: Proficiency::Intermediate,
        },
        Language {
            language: "Espagnol".into(),
            proficiency: Proficiency::Beginner,
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    ["TypeScript", "React", "Node.js", "PostgreSQL", "Docker"]
        .into_iter()
        .map(|name| Skill { name: name.into() })
        .collect()
}

pub fn hobbies() -> Vec<Hobby> {
    ["Lecture", "Course à pied", "Photographie"]
        .into_iter()
        .map(|name| Hobby { name: name.into() })
        .collect()
}

/// The full preset model.
pub fn resume() -> ResumeData {
    ResumeData {
        personal_details: personal_details(),
        experiences: experiences(),
        educations: educations(),
        languages: languages(),
        skills: skills(),
        hobbies: hobbies(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_fill_every_section() {
        let data = resume();
        assert!(!data.personal_details.full_name.is_empty());
        assert!(!data.experiences.is_empty());
        assert!(!data.educations.is_empty());
        assert!(!data.languages.is_empty());
        assert!(!data.skills.is_empty());
        assert!(!data.hobbies.is_empty());
    }

    #[test]
    fn test_current_position_has_open_end_date() {
        assert!(experiences()[0].end_date.is_empty());
    }
}
