//! Static career reference data: per-career requirements, outlook and
//! learning resources. Seeds the `career_details` catalogue; the live
//! prediction path does not read it.

use serde_json::{json, Value};

pub struct LearningResource {
    pub name: &'static str,
    pub url: &'static str,
    pub kind: &'static str,
}

pub struct CareerRequirements {
    pub name: &'static str,
    pub required_skills: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub education: &'static [&'static str],
    pub work_styles: &'static [&'static str],
    pub description: &'static str,
    pub salary_range: &'static str,
    pub job_growth: &'static str,
    pub learning_resources: &'static [LearningResource],
}

const fn resource(name: &'static str, url: &'static str, kind: &'static str) -> LearningResource {
    LearningResource { name, url, kind }
}

pub const CAREER_REQUIREMENTS: &[CareerRequirements] = &[
    CareerRequirements {
        name: "Software Developer",
        required_skills: &["Programming", "Problem Solving", "Data Structures", "Git", "Debugging"],
        interests: &["Technology & Innovation", "Problem Solving"],
        education: &["Bachelor's Degree", "Master's Degree"],
        work_styles: &["Remote", "Hybrid", "Office"],
        description: "Design, develop, and maintain software applications and systems.",
        salary_range: "$60,000 - $180,000",
        job_growth: "+22% (Much faster than average)",
        learning_resources: &[
            resource("CS50 - Harvard", "https://cs50.harvard.edu", "Course"),
            resource("FreeCodeCamp", "https://freecodecamp.org", "Platform"),
            resource("The Odin Project", "https://theodinproject.com", "Curriculum"),
        ],
    },
    CareerRequirements {
        name: "Data Scientist",
        required_skills: &["Python", "Statistics", "Machine Learning", "Data Visualization", "SQL"],
        interests: &["Technology & Innovation", "Science & Research", "Analytics"],
        education: &["Bachelor's Degree", "Master's Degree", "PhD"],
        work_styles: &["Remote", "Hybrid", "Office"],
        description: "Analyze complex data to help organizations make better decisions.",
        salary_range: "$70,000 - $200,000",
        job_growth: "+36% (Much faster than average)",
        learning_resources: &[
            resource("Kaggle Learn", "https://kaggle.com/learn", "Platform"),
            resource("DataCamp", "https://datacamp.com", "Course"),
        ],
    },
    CareerRequirements {
        name: "UX/UI Designer",
        required_skills: &["UI/UX Design", "Prototyping", "User Research", "Figma", "Adobe XD"],
        interests: &["Arts & Design", "Technology & Innovation", "Psychology"],
        education: &["Bachelor's Degree", "Associate Degree", "Bootcamp"],
        work_styles: &["Remote", "Hybrid", "Office"],
        description: "Create intuitive and engaging user experiences for digital products.",
        salary_range: "$55,000 - $140,000",
        job_growth: "+16% (Much faster than average)",
        learning_resources: &[
            resource("Google UX Design Certificate", "https://grow.google/uxdesign", "Certificate"),
            resource("Interaction Design Foundation", "https://interaction-design.org", "Platform"),
        ],
    },
    CareerRequirements {
        name: "Web Developer",
        required_skills: &["HTML/CSS", "JavaScript", "React", "Web Development", "Git"],
        interests: &["Technology & Innovation", "Creative Problem Solving"],
        education: &["Bachelor's Degree", "Associate Degree", "Bootcamp", "Self-taught"],
        work_styles: &["Remote", "Hybrid", "Office"],
        description: "Build and maintain websites and web applications.",
        salary_range: "$50,000 - $130,000",
        job_growth: "+23% (Much faster than average)",
        learning_resources: &[
            resource("MDN Web Docs", "https://developer.mozilla.org", "Documentation"),
            resource("Frontend Masters", "https://frontendmasters.com", "Platform"),
        ],
    },
    CareerRequirements {
        name: "Digital Marketing Manager",
        required_skills: &["Marketing", "SEO", "Social Media", "Analytics", "Content Strategy"],
        interests: &["Business & Entrepreneurship", "Communication", "Creativity"],
        education: &["Bachelor's Degree"],
        work_styles: &["Remote", "Hybrid", "Office"],
        description: "Plan and execute digital marketing campaigns across various channels.",
        salary_range: "$55,000 - $120,000",
        job_growth: "+10% (Faster than average)",
        learning_resources: &[
            resource("Google Digital Marketing", "https://grow.google", "Certificate"),
            resource("HubSpot Academy", "https://academy.hubspot.com", "Platform"),
        ],
    },
    CareerRequirements {
        name: "Product Manager",
        required_skills: &["Product Strategy", "Agile", "User Research", "Data Analysis", "Communication"],
        interests: &["Business & Entrepreneurship", "Technology & Innovation", "Problem Solving"],
        education: &["Bachelor's Degree", "Master's Degree", "MBA"],
        work_styles: &["Hybrid", "Office"],
        description: "Guide product development from conception to launch.",
        salary_range: "$70,000 - $180,000",
        job_growth: "+14% (Faster than average)",
        learning_resources: &[
            resource("Product School", "https://productschool.com", "Platform"),
            resource("Inspired by Marty Cagan", "#", "Book"),
        ],
    },
    CareerRequirements {
        name: "Graphic Designer",
        required_skills: &["Graphic Design", "Adobe Creative Suite", "Typography", "Color Theory"],
        interests: &["Arts & Design", "Creativity", "Visual Communication"],
        education: &["Bachelor's Degree", "Associate Degree"],
        work_styles: &["Remote", "Hybrid", "Office", "Freelance"],
        description: "Create visual concepts to communicate ideas.",
        salary_range: "$35,000 - $85,000",
        job_growth: "+3% (As fast as average)",
        learning_resources: &[
            resource("Skillshare Design Courses", "https://skillshare.com", "Platform"),
            resource("Adobe Tutorials", "https://helpx.adobe.com", "Tutorial"),
        ],
    },
    CareerRequirements {
        name: "Data Analyst",
        required_skills: &["SQL", "Excel", "Data Visualization", "Statistics", "Python"],
        interests: &["Analytics", "Business & Entrepreneurship", "Problem Solving"],
        education: &["Bachelor's Degree", "Associate Degree"],
        work_styles: &["Remote", "Hybrid", "Office"],
        description: "Collect and analyze data to help organizations make decisions.",
        salary_range: "$50,000 - $110,000",
        job_growth: "+25% (Much faster than average)",
        learning_resources: &[
            resource("Mode Analytics", "https://mode.com/sql-tutorial", "Tutorial"),
            resource("Tableau Public", "https://public.tableau.com", "Platform"),
        ],
    },
    CareerRequirements {
        name: "Cybersecurity Analyst",
        required_skills: &["Network Security", "Ethical Hacking", "Risk Assessment", "Cybersecurity"],
        interests: &["Technology & Innovation", "Problem Solving", "Security"],
        education: &["Bachelor's Degree", "Professional Certification"],
        work_styles: &["Office", "Hybrid"],
        description: "Protect networks and systems from security breaches.",
        salary_range: "$60,000 - $150,000",
        job_growth: "+35% (Much faster than average)",
        learning_resources: &[
            resource("Cybrary", "https://cybrary.it", "Platform"),
            resource("TryHackMe", "https://tryhackme.com", "Practice"),
        ],
    },
    CareerRequirements {
        name: "Content Writer",
        required_skills: &["Content Writing", "SEO", "Research", "Grammar", "Storytelling"],
        interests: &["Media & Communications", "Creativity", "Writing"],
        education: &["Bachelor's Degree", "Associate Degree"],
        work_styles: &["Remote", "Freelance", "Hybrid"],
        description: "Create written content for websites, blogs, and marketing.",
        salary_range: "$35,000 - $80,000",
        job_growth: "+9% (As fast as average)",
        learning_resources: &[
            resource("Copyblogger", "https://copyblogger.com", "Blog"),
            resource("Content Marketing Institute", "https://contentmarketinginstitute.com", "Resource"),
        ],
    },
];

const MAX_RELATED: usize = 3;

pub fn find_career(name: &str) -> Option<&'static CareerRequirements> {
    CAREER_REQUIREMENTS.iter().find(|c| c.name == name)
}

impl CareerRequirements {
    pub fn requirements_json(&self) -> Value {
        json!({
            "skills": self.required_skills,
            "interests": self.interests,
            "education": self.education,
            "work_style": self.work_styles,
        })
    }

    pub fn salary_json(&self) -> Value {
        json!({ "range": self.salary_range })
    }

    pub fn learning_resources_json(&self) -> Value {
        Value::Array(
            self.learning_resources
                .iter()
                .map(|r| json!({ "name": r.name, "url": r.url, "type": r.kind }))
                .collect(),
        )
    }

    /// Other careers sharing at least one required skill, most overlap first.
    pub fn related_careers(&self) -> Vec<&'static str> {
        let mut related: Vec<(&'static str, usize)> = CAREER_REQUIREMENTS
            .iter()
            .filter(|other| other.name != self.name)
            .map(|other| {
                let overlap = other
                    .required_skills
                    .iter()
                    .filter(|s| self.required_skills.contains(*s))
                    .count();
                (other.name, overlap)
            })
            .filter(|(_, overlap)| *overlap > 0)
            .collect();
        related.sort_by(|a, b| b.1.cmp(&a.1));
        related
            .into_iter()
            .take(MAX_RELATED)
            .map(|(name, _)| name)
            .collect()
    }
}
