//! Authored page content
//!
//! Everything shown on the page is fixed at compile time. Entries have no
//! identity beyond their position in the containing slice.

use crate::section::CardId;

/// Glyph rendered in a card badge or next to a hero link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Terminal,
    Coffee,
    Smartphone,
    Car,
    Heart,
    Mail,
    Linkedin,
    Github,
    ChevronDown,
}

impl Icon {
    /// Every icon the page can draw
    pub const ALL: [Self; 10] = [
        Self::Code,
        Self::Terminal,
        Self::Coffee,
        Self::Smartphone,
        Self::Car,
        Self::Heart,
        Self::Mail,
        Self::Linkedin,
        Self::Github,
        Self::ChevronDown,
    ];

    /// Kebab-case glyph name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Terminal => "terminal",
            Self::Coffee => "coffee",
            Self::Smartphone => "smartphone",
            Self::Car => "car",
            Self::Heart => "heart",
            Self::Mail => "mail",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::ChevronDown => "chevron-down",
        }
    }
}

/// Kind of outbound contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    ProfessionalNetwork,
    CodeHosting,
}

impl LinkKind {
    /// Icon drawn for the link
    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::Email => Icon::Mail,
            Self::ProfessionalNetwork => Icon::Linkedin,
            Self::CodeHosting => Icon::Github,
        }
    }

    /// Accessible label for the link
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::ProfessionalNetwork => "LinkedIn",
            Self::CodeHosting => "GitHub",
        }
    }
}

/// Outbound hyperlink targets; opaque strings, never parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLinks {
    pub email: &'static str,
    pub professional_network: &'static str,
    pub code_hosting: &'static str,
}

impl ContactLinks {
    /// Links in display order
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &'static str)> {
        [
            (LinkKind::Email, self.email),
            (LinkKind::ProfessionalNetwork, self.professional_network),
            (LinkKind::CodeHosting, self.code_hosting),
        ]
        .into_iter()
    }
}

/// Hero banner content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub links: ContactLinks,
}

/// Work-experience timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub tech: &'static [&'static str],
    pub icon: Icon,
    pub points: &'static [&'static str],
}

impl Experience {
    /// Subtitle line under the title
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} | {}", self.company, self.date)
    }
}

/// Project showcase entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Gradient classes of the card accent
    pub accent: &'static str,
    pub icon: Icon,
    pub points: &'static [&'static str],
}

/// Skills grid category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// The complete content store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: &'static [Experience],
    pub projects: &'static [Project],
    pub skills: &'static [SkillCategory],
}

impl Portfolio {
    /// The authored content shown on the page
    #[must_use]
    pub fn authored() -> &'static Self {
        &AUTHORED
    }

    /// Every hoverable card, experiences first, in authored order
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        let experiences = (0..self.experiences.len()).map(CardId::Experience);
        let projects = (0..self.projects.len()).map(CardId::Project);
        experiences.chain(projects)
    }
}

static AUTHORED: Portfolio = Portfolio {
    profile: PROFILE,
    experiences: &EXPERIENCES,
    projects: &PROJECTS,
    skills: &SKILLS,
};

const PROFILE: Profile = Profile {
    name: "Nayma Garcia Virgen",
    headline: "Software Engineer",
    links: ContactLinks {
        email: "mailto:nayma.garciav@gmail.com",
        professional_network: "https://linkedin.com/in/naymagarcia",
        code_hosting: "https://github.com/Nayma-Garcia",
    },
};

const EXPERIENCES: [Experience; 3] = [
    Experience {
        title: "Software Engineering Intern",
        company: "Principal Financial Group",
        date: "May - August 2024",
        tech: &["Java", "Python", "AWS"],
        icon: Icon::Code,
        points: &[
            "Implemented a React website, featuring secure login and chat capabilities, where user queries were processed by AWS Lambda functions written in Python, leveraging the Llama3 LLM for accurate, context-aware responses.",
            "Developed dynamic online applications on the Unqork platform, streamlining workflows and enhancing user experience for life and disability insurance clients through optimized interfaces.",
            "Automated critical testing processes using Selenium and Java Robot, significantly boosting testing speed and accuracy, resulting in improved overall software quality and stability",
            "Optimized AWS Lambda functions written in Python by actively monitoring CloudWatch metrics to reduce invocation frequency and minimize runtime, achieving cost efficiency in serverless operations.",
        ],
    },
    Experience {
        title: "Software Developer Intern",
        company: "Farmers Mutual Hail",
        date: "May - August 2023",
        tech: &["Java", "SQL", "HTML/CSS"],
        icon: Icon::Terminal,
        points: &[
            "Engineered a fully automated system in Java to streamline the IT department’s annual user audit process, extending functionality to include non-AD employees (e.g., contractors), significantly improving audit efficiency and accuracy.",
            "Developed a  Java ”flagging” mechanism, empowering users to mark policies for printing, enhancing workflow control and reducing document processing errors.",
            "Implemented a document transmission management system using SQL and Java, allowing precise control over customer document dispatch with built-in safeguards to prevent accidental transmissions.",
            "Redesigned the customer-facing policy information page using HTML and CSS, delivering an optimized, user-friendly experience that significantly enhanced accessibility and engagement.",
        ],
    },
    Experience {
        title: "Software Engineer Peer Mentor",
        company: "Iowa State University",
        date: "April 2022 - Current",
        tech: &["C", "Git", "React"],
        icon: Icon::Coffee,
        points: &[
            "Supported the growth of first-year software engineering students by offering guidance, resources, and help with core concepts, making the transition to college smoother.",
            "Planned and led hands-on workshops and group study sessions, building a collaborative learning environment and helping foster a supportive community among peers in the program.",
        ],
    },
];

const PROJECTS: [Project; 3] = [
    Project {
        title: "Spinder",
        description: "Mobile app integrating Spotify API for personalized song recommendations with swipe functionality",
        tech: &["Java", "Spotify API", "SpringBoot"],
        accent: "from-emerald-500 to-green-700",
        icon: Icon::Smartphone,
        points: &[
            "Developed a music discovery app using Java and Spring Boot, integrating Spotify API for personalized song recommendations and playlist creation based on user input.",
            "Built a user profile system with SQL, enabling users to track top songs, connect with friends, and interact via a chat feature, all deployed with CI/CD.",
        ],
    },
    Project {
        title: "AWS DeepRacer",
        description: "Developed and trained an autonomous racing model using reinforcement learning",
        tech: &["Python", "AWS", "Machine Learning"],
        accent: "from-green-500 to-emerald-700",
        icon: Icon::Car,
        points: &[
            "Trained and fine-tuned an AWS DeepRacer model using Python and Reinforcement Learning, optimizing the autonomous vehicle’s decision-making for improved racing performance in a simulated environment.",
            "Utilized a range of AWS services, including S3 for data storage and Reinforcement Learning for model training, enabling continuous improvement through real-time data feedback and performance metrics.",
        ],
    },
    Project {
        title: "Devs Do Good Hackathon",
        description: "Led development of events page for non-profit organization website",
        tech: &["React", "JavaScript", "Bootstrap"],
        accent: "from-emerald-600 to-green-800",
        icon: Icon::Heart,
        points: &[
            "Directed the frontend development of the events page, ensuring a seamless user experience.",
            "Applied responsive design techniques using Bootstrap to optimize accessibility across devices.",
            "Delivered a fully functional site within 24 hours, meeting tight deadlines with efficiency.",
        ],
    },
];

const SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        name: "programming",
        skills: &[
            "Java",
            "Python",
            "JavaScript",
            "C",
            "C++",
            "HTML/CSS",
            "SQL",
            "TypeScript",
            "React",
        ],
    },
    SkillCategory {
        name: "technologies",
        skills: &["SpringBoot", "JUnit", "Mockito", "Android", "Node.js", "MongoDB"],
    },
    SkillCategory {
        name: "devops",
        skills: &["CI/CD", "Maven", "Gradle", "AWS", "Docker"],
    },
    SkillCategory {
        name: "tools",
        skills: &["IntelliJ IDEA", "Git/GitHub", "JIRA", "Postman", "AGILE", "SCRUM"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authored_counts() {
        let portfolio = Portfolio::authored();
        assert_eq!(portfolio.experiences.len(), 3);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.skills.len(), 4);
    }

    #[test]
    fn test_cards_enumerate_experiences_then_projects() {
        let cards: Vec<CardId> = Portfolio::authored().cards().collect();
        assert_eq!(
            cards,
            vec![
                CardId::Experience(0),
                CardId::Experience(1),
                CardId::Experience(2),
                CardId::Project(0),
                CardId::Project(1),
                CardId::Project(2),
            ]
        );
    }

    #[test]
    fn test_contact_links_order() {
        let kinds: Vec<LinkKind> = Portfolio::authored()
            .profile
            .links
            .iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                LinkKind::Email,
                LinkKind::ProfessionalNetwork,
                LinkKind::CodeHosting
            ]
        );
    }

    #[test]
    fn test_experience_subtitle() {
        let first = Portfolio::authored().experiences.first();
        assert_eq!(
            first.map(Experience::subtitle),
            Some("Principal Financial Group | May - August 2024".to_string())
        );
    }

    #[test]
    fn test_icon_names_unique() {
        let mut names: Vec<&str> = Icon::ALL.iter().map(|icon| icon.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Icon::ALL.len());
    }
}
