use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::SideMode;

/// Seed for the hero sparkle constellation. Any value works; this one is
/// simply the arrangement the site shipped with.
pub const SPARKLE_SEED: u32 = 0xFADED07;

/// Ray layer options. `ray_count` is per side, so `Both` renders twice
/// this many rays.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RayConfig {
    pub side: SideMode,
    pub ray_count: usize,
    pub base_duration: f32,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self { side: SideMode::Both, ray_count: 10, base_duration: 45.0 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SparkleConfig {
    pub count: usize,
    pub seed: u32,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self { count: 30, seed: SPARKLE_SEED }
    }
}

/// Attract-mode scroll pacing. The spring constants are the feel of the
/// progress indicator; stiffer snaps, heavier damping glides.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub glide_secs: f32,
    pub dwell_secs: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { glide_secs: 40.0, dwell_secs: 6.0, spring_stiffness: 180.0, spring_damping: 24.0 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub mailto: String,
    pub instagram: String,
    pub whatsapp: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            github: "https://github.com/Pozzzo".into(),
            linkedin: "https://www.linkedin.com/in/diego-pozo-abregu/".into(),
            mailto: "mailto:diegopozo1323@gmail.com?subject=Contact%20from%20portfolio".into(),
            instagram: "https://www.instagram.com/diego.abregupozo/".into(),
            whatsapp: "https://wa.me/qr/MRVIPGZ7UIBXI1".into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role_line: String,
    pub availability: String,
    /// Flip-card bio, one entry per paragraph.
    pub long_about: Vec<String>,
    /// Portrait image, relative to the asset root.
    pub portrait: String,
    pub socials: SocialLinks,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Diego Bruno Pozo Abregu".into(),
            role_line: "Builder of AI, XR & robotics solutions.".into(),
            availability: "Open to collaborations".into(),
            long_about: vec![
                "I’m a builder with a mechatronics background who enjoys taking ideas \
                 from sketch to real-world impact. My work spans AI, XR, and \
                 robotics—designing systems, shipping experiments, and iterating \
                 quickly with users. I co-founded AIDA (XR + AI-generated content) \
                 and DoersFund, where we back fast demos and MVPs through hackathons \
                 and hands-on support. I love solving hard problems with small, \
                 focused teams and turning prototypes into outcomes. I’m also part \
                 of NONHUMAN, an AI research community focused on Embodied \
                 AI—spanning LLMs, robotics, autonomous agents and computer vision."
                    .into(),
                "NONHUMAN is the first embodied AI research lab in Perú, a lab \
                 striving for capacity equivalent to global power countries. Our \
                 mission is to understand and build artificial intelligence capable \
                 of transcending the virtual world, endowing it with abilities to \
                 interact with the physical environment. We believe that the next \
                 great step for AI is its integration into the real world through \
                 robots that perceive, act and learn alongside us."
                    .into(),
            ],
            portrait: "diego.webp".into(),
            socials: SocialLinks::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub tagline: String,
    /// Hero badge prefix, e.g. "Member of" or "Co-founder of".
    pub membership: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hackathon {
    pub name: String,
    pub url: String,
    pub scope: String,
    pub deadline: String,
    pub prize: String,
}

impl Default for Hackathon {
    fn default() -> Self {
        Self {
            name: "Blitz Hackathon".into(),
            url: "https://forms.zohopublic.com/santinomav789gm1/form/EmployeeEmergencyContactForm/formperma/ImGOs1SS8_9hfsZd5QIeAsbnfBx1wPKIliD4GSLdT5I".into(),
            scope: "Virtual · LATAM".into(),
            deadline: "Closes Oct 31".into(),
            prize: "$1000 equity-free + direct pass to DoersFund".into(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectLinks {
    pub demo: Option<String>,
    pub code: Option<String>,
    pub code_label: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub links: ProjectLinks,
    /// Poster or still for the card media slot, relative to the asset
    /// root. Cards whose poster is absent on disk show a placeholder.
    pub poster: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    /// Wordmark halves; the second half renders in the accent tint.
    pub wordmark_leading: String,
    pub wordmark_accent: String,
    pub nav_labels: Vec<String>,
    pub footer_note: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Diego Bruno Pozo — Portfolio".into(),
            description: "Builder of AI, XR & robotics solutions. I turn ideas into \
                          demos, MVPs, and production systems."
                .into(),
            wordmark_leading: "diego.".into(),
            wordmark_accent: "pozo".into(),
            nav_labels: vec![
                "Projects".into(),
                "Research".into(),
                "DoersFund".into(),
                "Contact".into(),
            ],
            footer_note: "© 2026 Diego Bruno Pozo Abregu. All rights reserved.".into(),
        }
    }
}

/// Everything the scene draws, with the shipped site as the default.
/// A JSON file of the same shape can override any subset of it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteContent {
    pub meta: SiteMeta,
    pub profile: Profile,
    pub hero_mission: String,
    pub organizations: Vec<Organization>,
    pub hackathon: Hackathon,
    pub skill_chips: Vec<String>,
    pub projects: Vec<Project>,
    pub contact_heading: String,
    pub contact_blurb: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            meta: SiteMeta::default(),
            profile: Profile::default(),
            hero_mission: "NONHUMAN is the first embodied AI research lab in Peru, \
                           striving to achieve the capacity of global power \
                           countries. Our mission is to understand and build \
                           artificial intelligence capable of transcending the \
                           virtual world."
                .into(),
            organizations: vec![
                Organization {
                    name: "NONHUMAN".into(),
                    url: "https://www.nonhuman.site/".into(),
                    tagline: "AI research community exploring LLMs, robotics, \
                              autonomous agents and computer vision — focused on \
                              Embodied AI."
                        .into(),
                    membership: "Member of".into(),
                },
                Organization {
                    name: "DoersFund".into(),
                    url: "https://doersfund.org".into(),
                    tagline: "Maker-first foundation helping early projects reach \
                              MVP quality with visibility, micro-funding and \
                              hands-on acceleration."
                        .into(),
                    membership: "Co-founder of".into(),
                },
            ],
            hackathon: Hackathon::default(),
            skill_chips: vec![
                "XR experiences".into(),
                "Builder / maker".into(),
                "Sports player".into(),
                "Creative coder".into(),
                "Traveler".into(),
            ],
            projects: vec![
                Project {
                    title: "XR prototyping & training".into(),
                    blurb: "Unity/AR demos and immersive experiences—rapid \
                            iterations, UI overlays and interactive flows."
                        .into(),
                    tags: vec!["Unity".into(), "XR".into(), "UX".into(), "Prototyping".into()],
                    links: ProjectLinks {
                        demo: None,
                        code: Some("https://drive.google.com/drive/u/0/folders/1EkYOlrnCwOYOhE246FSJriz-zZz06cRP".into()),
                        code_label: Some("Repository (XR experiences)".into()),
                    },
                    poster: Some("xr_cover_poster.jpg".into()),
                },
                Project {
                    title: "Conversational NAO with VLM/VLA".into(),
                    blurb: "Pipeline to connect NAO V6 with GenAI (LLM/VLM). \
                            Perception → dialog → action for embodied interactions."
                        .into(),
                    tags: vec![
                        "NAO V6".into(),
                        "LLM".into(),
                        "VLM/VLA".into(),
                        "Embodied AI".into(),
                    ],
                    links: ProjectLinks {
                        demo: Some("https://www.youtube.com/watch?v=AWuyNfJ0bhQ".into()),
                        code: None,
                        code_label: None,
                    },
                    poster: Some("nao_poster.jpg".into()),
                },
                Project {
                    title: "Universal Robot Teleoperation".into(),
                    blurb: "Remote UR control via VR tracker and Python bridge with \
                            safe workspace limits."
                        .into(),
                    tags: vec!["UR3e".into(), "rtde".into(), "VR".into(), "Python".into()],
                    links: ProjectLinks {
                        demo: None,
                        code: Some("https://github.com/elpis-lab/UR10_Teleop".into()),
                        code_label: None,
                    },
                    poster: Some("ur_vr_poster.jpg".into()),
                },
                Project {
                    title: "TCG Pokémon Search App".into(),
                    blurb: "Given a photo, identify the card and fetch details from \
                            well-known sources. Focus on fast, reliable recognition \
                            UX."
                        .into(),
                    tags: vec!["Vision".into(), "Mobile".into(), "Search".into()],
                    links: ProjectLinks::default(),
                    poster: Some("tcg.webp".into()),
                },
            ],
            contact_heading: "Let’s build something great".into(),
            contact_blurb: "Reach out for collaborations, consulting or talks. I \
                            respond quickly."
                .into(),
        }
    }
}

impl SiteContent {
    /// Loads a JSON override. Any read or parse problem yields `None` so
    /// the built-in content keeps the scene alive; callers decide whether
    /// that deserves a warning.
    pub fn load(path: &Path) -> Option<Self> {
        let raw = fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }
}
