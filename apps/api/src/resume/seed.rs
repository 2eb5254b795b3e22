//! Seed resume handed to every new editing session.

use crate::resume::model::{
    Education, EntryId, Experience, Extracurricular, PersonalInfo, Project, Resume, Skill,
};

const SEED_SKILLS: &[(&str, &str)] = &[
    ("skill1", "JavaScript (ES6+)"),
    ("skill2", "React & Next.js"),
    ("skill3", "Node.js"),
    ("skill4", "TypeScript"),
    ("skill5", "Tailwind CSS"),
    ("skill6", "SQL & NoSQL Databases"),
];

/// Returns the non-empty example resume: at least one entry in every section.
pub fn seed_resume() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone_number: "(123) 456-7890".to_string(),
            address: "San Francisco, CA".to_string(),
            link: "linkedin.com/in/janedoe".to_string(),
            career_objective: "A highly motivated and results-oriented software engineer with a \
                passion for building scalable and user-friendly web applications. Seeking to \
                leverage my expertise in full-stack development to contribute to a dynamic and \
                innovative team."
                .to_string(),
        },
        experience: vec![Experience {
            id: EntryId::from("exp1"),
            job_title: "Senior Software Engineer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: "Present".to_string(),
            description: [
                "- Led the development of a new client-facing web application, resulting in a 20% increase in user engagement.",
                "- Mentored junior developers and conducted code reviews to maintain high code quality.",
                "- Collaborated with product managers to define feature requirements and timelines.",
            ]
            .join("\n"),
        }],
        education: vec![Education {
            id: EntryId::from("edu1"),
            degree: "B.S. in Computer Science".to_string(),
            school: "University of California, Berkeley".to_string(),
            location: "Berkeley, CA".to_string(),
            grad_date: "May 2019".to_string(),
        }],
        projects: vec![Project {
            id: EntryId::from("proj1"),
            name: "E-commerce Platform".to_string(),
            description: "Developed a full-stack e-commerce website using Next.js, Stripe, and a \
                PostgreSQL database. Implemented features such as product search, shopping cart, \
                and user authentication."
                .to_string(),
            link: "github.com/janedoe/ecommerce".to_string(),
        }],
        skills: SEED_SKILLS
            .iter()
            .map(|(id, name)| Skill {
                id: EntryId::from(*id),
                name: (*name).to_string(),
            })
            .collect(),
        extracurriculars: vec![Extracurricular {
            id: EntryId::from("extra1"),
            activity: "Hackathon Club".to_string(),
            description: "Participated in multiple hackathons, winning 'Best UI/UX' for a mobile \
                app concept in 2018."
                .to_string(),
        }],
    }
}
