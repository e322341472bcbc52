//! Structured profile produced by the extraction engine

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Root aggregate. Built fresh for every input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: SkillMap,
    pub certifications: Vec<CertificationRecord>,
    pub achievements: Vec<String>,
}

/// Contact details. An empty string means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub degree: String,
    /// Reserved; nothing fills it yet.
    pub specialization: String,
    pub institution: String,
    pub end_date: String,
    pub cgpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRecord {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationRecord {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Skill category name to tokens, kept in insertion order.
///
/// Serializes as a JSON object. Empty categories are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMap {
    categories: Vec<(String, Vec<String>)>,
}

impl SkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `skills` to `category`, creating it at the end if needed.
    /// Tokens already present in the category are skipped.
    pub fn extend<I>(&mut self, category: &str, skills: I)
    where
        I: IntoIterator<Item = String>,
    {
        let skills: Vec<String> = skills.into_iter().collect();
        if skills.is_empty() {
            return;
        }

        let index = match self.categories.iter().position(|(name, _)| name == category) {
            Some(index) => index,
            None => {
                self.categories.push((category.to_string(), Vec::new()));
                self.categories.len() - 1
            }
        };

        let entry = &mut self.categories[index].1;
        for skill in skills {
            if !entry.contains(&skill) {
                entry.push(skill);
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of tokens across every category.
    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|(_, skills)| skills.len()).sum()
    }
}

impl Serialize for SkillMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, skills) in &self.categories {
            map.serialize_entry(name, skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SkillMapVisitor;

        impl<'de> Visitor<'de> for SkillMapVisitor {
            type Value = SkillMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of skill category to skill list")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut skills = SkillMap::new();
                while let Some((category, tokens)) = access.next_entry::<String, Vec<String>>()? {
                    skills.extend(&category, tokens);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillMapVisitor)
    }
}
