//! Bundled static fallback dataset.
//!
//! Used whenever the remote store is unconfigured or failing. Collections
//! are pre-sorted the way the remote queries would return them: skills and
//! experiences ascending by id, projects and education descending.

use super::{Education, Experience, Profile, Project, ProjectMember, Skill};

pub fn profile() -> Profile {
    Profile {
        id: 1,
        name: "Mina Okafor".to_string(),
        roles: vec![
            "Full Stack Developer".to_string(),
            "Systems Programmer".to_string(),
            "Open Source Contributor".to_string(),
        ],
        description: "I build reliable backends and the tools around them. \
                      Currently focused on data-heavy services, developer \
                      experience, and making small software that stays small."
            .to_string(),
        github: "https://github.com/minaokafor".to_string(),
        resume: "https://minaokafor.dev/resume.pdf".to_string(),
        linkedin: "https://www.linkedin.com/in/mina-okafor".to_string(),
        twitter: "https://twitter.com/minaokafor".to_string(),
        insta: "https://www.instagram.com/minaokafor.dev".to_string(),
        facebook: "https://www.facebook.com/minaokafor.dev".to_string(),
        profile_url: "https://minaokafor.dev/assets/profile.jpg".to_string(),
    }
}

pub fn skills() -> Vec<Skill> {
    let entry = |id, name: &str, image: &str, category: &str| Skill {
        id,
        name: name.to_string(),
        image: format!("https://minaokafor.dev/assets/icons/{image}.svg"),
        category: category.to_string(),
        love_count: 0,
    };

    vec![
        entry(1, "TypeScript", "typescript", "Frontend"),
        entry(2, "React", "react", "Frontend"),
        entry(3, "Tailwind CSS", "tailwind", "Frontend"),
        entry(4, "Node.js", "nodejs", "Backend"),
        entry(5, "PostgreSQL", "postgresql", "Backend"),
        entry(6, "Rust", "rust", "Backend"),
        entry(7, "Docker", "docker", "DevOps"),
        entry(8, "GitHub Actions", "github-actions", "DevOps"),
        entry(9, "Terraform", "terraform", "DevOps"),
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: 1,
            img: "https://minaokafor.dev/assets/logos/brightloom.png".to_string(),
            role: "Backend Engineer".to_string(),
            company: "Brightloom Labs".to_string(),
            date: "Jun 2021 - Aug 2023".to_string(),
            desc: "Owned the ingestion pipeline for a telemetry product, \
                   moving it from a nightly batch job to a streaming service \
                   handling 40k events per second."
                .to_string(),
            skills: Some(vec![
                "Rust".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ]),
            doc: None,
        },
        Experience {
            id: 2,
            img: "https://minaokafor.dev/assets/logos/ferrwork.png".to_string(),
            role: "Senior Software Engineer".to_string(),
            company: "Ferrwork".to_string(),
            date: "Sep 2023 - Present".to_string(),
            desc: "Leading the internal platform team: build tooling, \
                   deployment automation, and the service template every new \
                   project starts from."
                .to_string(),
            skills: Some(vec![
                "TypeScript".to_string(),
                "Terraform".to_string(),
                "GitHub Actions".to_string(),
            ]),
            doc: Some("https://minaokafor.dev/assets/docs/ferrwork-reference.pdf".to_string()),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 3,
            title: "Driftwatch".to_string(),
            date: "Feb 2025".to_string(),
            description: "Infrastructure drift detector that diffs live cloud \
                          state against Terraform plans and opens annotated \
                          pull requests for the delta."
                .to_string(),
            image: "https://minaokafor.dev/assets/projects/driftwatch.png".to_string(),
            tags: vec![
                "Rust".to_string(),
                "Terraform".to_string(),
                "GitHub API".to_string(),
            ],
            category: "devops".to_string(),
            github: Some("https://github.com/minaokafor/driftwatch".to_string()),
            webapp: None,
            members: None,
        },
        Project {
            id: 2,
            title: "Shelfmate".to_string(),
            date: "Oct 2024".to_string(),
            description: "Shared reading-list app with offline-first sync and \
                          a recommendation feed built from friends' shelves."
                .to_string(),
            image: "https://minaokafor.dev/assets/projects/shelfmate.png".to_string(),
            tags: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "PostgreSQL".to_string(),
            ],
            category: "web app".to_string(),
            github: Some("https://github.com/minaokafor/shelfmate".to_string()),
            webapp: Some("https://shelfmate.app".to_string()),
            members: Some(vec![
                ProjectMember {
                    name: "Mina Okafor".to_string(),
                    img: "https://minaokafor.dev/assets/profile.jpg".to_string(),
                    linkedin: "https://www.linkedin.com/in/mina-okafor".to_string(),
                    github: "https://github.com/minaokafor".to_string(),
                },
                ProjectMember {
                    name: "Jon Halvorsen".to_string(),
                    img: "https://minaokafor.dev/assets/members/jon.jpg".to_string(),
                    linkedin: "https://www.linkedin.com/in/jon-halvorsen".to_string(),
                    github: "https://github.com/jhalvorsen".to_string(),
                },
            ]),
        },
        Project {
            id: 1,
            title: "Tidepool".to_string(),
            date: "Mar 2024".to_string(),
            description: "Embeddable key-value cache with TTL eviction and a \
                          wire-compatible Redis subset, written as a single \
                          dependency-light crate."
                .to_string(),
            image: "https://minaokafor.dev/assets/projects/tidepool.png".to_string(),
            tags: vec!["Rust".to_string(), "Caching".to_string()],
            category: "library".to_string(),
            github: Some("https://github.com/minaokafor/tidepool".to_string()),
            webapp: None,
            members: None,
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            id: 2,
            img: "https://minaokafor.dev/assets/logos/uni-aalborg.png".to_string(),
            school: "Aalborg University".to_string(),
            degree: "MSc, Computer Science".to_string(),
            date: "2019 - 2021".to_string(),
            grade: "9.4 / 12".to_string(),
            desc: "Thesis on incremental view maintenance for streaming \
                   databases."
                .to_string(),
            certificate: Some(
                "https://minaokafor.dev/assets/docs/msc-certificate.pdf".to_string(),
            ),
        },
        Education {
            id: 1,
            img: "https://minaokafor.dev/assets/logos/uni-lagos.png".to_string(),
            school: "University of Lagos".to_string(),
            degree: "BSc, Computer Engineering".to_string(),
            date: "2015 - 2019".to_string(),
            grade: "First Class".to_string(),
            desc: "Coursework in distributed systems, compilers, and embedded \
                   programming."
                .to_string(),
            certificate: None,
        },
    ]
}
