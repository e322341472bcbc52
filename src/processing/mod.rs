//! Structured-field extraction from resume text

pub mod document;
pub mod text;
pub mod rules;
pub mod entities;
pub mod locator;
pub mod skills;
pub mod education;
pub mod experience;
pub mod projects;
pub mod certifications;
pub mod achievements;
pub mod assembler;
pub mod validator;

pub use assembler::{parse_resume, ResumeParser};
pub use document::{
    CertificationRecord, Document, EducationRecord, ExperienceRecord, PersonalInfo, ProjectRecord,
    SkillMap,
};
pub use locator::SectionKind;
pub use validator::{validate, ValidationReport};
