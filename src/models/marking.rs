//! Marking records
//!
//! Students, papers, questions, marking schemes, submissions and answers as
//! exchanged with the marking client. JSON-valued fields are kept opaque.

use super::{matches_opt, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Empty list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoFilter {}

// ---- student ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub student_id: String,
    pub name: String,
}

impl Record for Student {
    type Draft = NewStudent;
    type Filter = NoFilter;

    const KIND: &'static str = "student";
    const FILTER_PARAMS: &'static [&'static str] = &[];

    fn assemble(id: i64, draft: NewStudent) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            name: draft.name,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, _filter: &NoFilter) -> bool {
        true
    }
}

// ---- paper ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: i64,
    pub subject_name: String,
    pub paper_no: i32,
    pub part: Option<String>,
    pub is_results_released: bool,
    pub is_reasoning_visible: bool,
    pub layout_json: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPaper {
    pub subject_name: String,
    pub paper_no: i32,
    #[serde(default)]
    pub part: Option<String>,
    #[serde(default)]
    pub is_results_released: bool,
    #[serde(default)]
    pub is_reasoning_visible: bool,
    #[serde(default)]
    pub layout_json: Option<Value>,
}

impl Record for Paper {
    type Draft = NewPaper;
    type Filter = NoFilter;

    const KIND: &'static str = "paper";
    const FILTER_PARAMS: &'static [&'static str] = &[];

    fn assemble(id: i64, draft: NewPaper) -> Self {
        Self {
            id,
            subject_name: draft.subject_name,
            paper_no: draft.paper_no,
            part: draft.part,
            is_results_released: draft.is_results_released,
            is_reasoning_visible: draft.is_reasoning_visible,
            layout_json: draft.layout_json,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, _filter: &NoFilter) -> bool {
        true
    }
}

// ---- question ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionType {
    Mcq,
    Short,
    Essay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub paper_id: i64,
    pub qno: i32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    pub options: Option<Value>,
    pub answer_key: Option<String>,
    pub max_marks: Option<f64>,
    pub rubric: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub paper_id: i64,
    pub qno: i32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub answer_key: Option<String>,
    #[serde(default)]
    pub max_marks: Option<f64>,
    #[serde(default)]
    pub rubric: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionFilter {
    pub paper_id: Option<i64>,
}

impl Record for Question {
    type Draft = NewQuestion;
    type Filter = QuestionFilter;

    const KIND: &'static str = "question";
    const FILTER_PARAMS: &'static [&'static str] = &["paper_id"];

    fn assemble(id: i64, draft: NewQuestion) -> Self {
        Self {
            id,
            paper_id: draft.paper_id,
            qno: draft.qno,
            question_type: draft.question_type,
            text: draft.text,
            options: draft.options,
            answer_key: draft.answer_key,
            max_marks: draft.max_marks,
            rubric: draft.rubric,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, filter: &QuestionFilter) -> bool {
        matches_opt(filter.paper_id.as_ref(), &self.paper_id)
    }
}

// ---- scheme ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: i64,
    pub paper_id: i64,
    pub name: String,
    pub version: i32,
    pub is_active: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewScheme {
    pub paper_id: i64,
    pub name: String,
    pub version: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemeFilter {
    pub paper_id: Option<i64>,
}

impl Record for Scheme {
    type Draft = NewScheme;
    type Filter = SchemeFilter;

    const KIND: &'static str = "scheme";
    const FILTER_PARAMS: &'static [&'static str] = &["paper_id"];

    fn assemble(id: i64, draft: NewScheme) -> Self {
        Self {
            id,
            paper_id: draft.paper_id,
            name: draft.name,
            version: draft.version,
            is_active: draft.is_active,
            notes: draft.notes,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, filter: &SchemeFilter) -> bool {
        matches_opt(filter.paper_id.as_ref(), &self.paper_id)
    }
}

// ---- submission ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub paper_id: i64,
    pub student_id: String,
    pub is_visible_to_student: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubmission {
    pub paper_id: i64,
    pub student_id: String,
    #[serde(default)]
    pub is_visible_to_student: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFilter {
    pub paper_id: Option<i64>,
    pub student_id: Option<String>,
}

impl Record for Submission {
    type Draft = NewSubmission;
    type Filter = SubmissionFilter;

    const KIND: &'static str = "submission";
    const FILTER_PARAMS: &'static [&'static str] = &["paper_id", "student_id"];

    fn assemble(id: i64, draft: NewSubmission) -> Self {
        Self {
            id,
            paper_id: draft.paper_id,
            student_id: draft.student_id,
            is_visible_to_student: draft.is_visible_to_student,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, filter: &SubmissionFilter) -> bool {
        matches_opt(filter.paper_id.as_ref(), &self.paper_id)
            && matches_opt(filter.student_id.as_deref(), self.student_id.as_str())
    }
}

// ---- answer ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub submission_id: i64,
    pub question_id: i64,
    pub scheme_question_id: Option<i64>,
    pub response_text: Option<String>,
    pub chosen_option: Option<String>,
    pub reasoning: Option<String>,
    pub omr_json: Option<Value>,
    pub ocr_text: Option<String>,
    pub ocr_conf: Option<f64>,
    pub flags: Option<Value>,
    pub image_crop_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAnswer {
    pub submission_id: i64,
    pub question_id: i64,
    #[serde(default)]
    pub scheme_question_id: Option<i64>,
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub chosen_option: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub omr_json: Option<Value>,
    #[serde(default)]
    pub ocr_text: Option<String>,
    #[serde(default)]
    pub ocr_conf: Option<f64>,
    #[serde(default)]
    pub flags: Option<Value>,
    #[serde(default)]
    pub image_crop_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerFilter {
    pub submission_id: Option<i64>,
    pub question_id: Option<i64>,
}

impl Record for Answer {
    type Draft = NewAnswer;
    type Filter = AnswerFilter;

    const KIND: &'static str = "answer";
    const FILTER_PARAMS: &'static [&'static str] = &["submission_id", "question_id"];

    fn assemble(id: i64, draft: NewAnswer) -> Self {
        Self {
            id,
            submission_id: draft.submission_id,
            question_id: draft.question_id,
            scheme_question_id: draft.scheme_question_id,
            response_text: draft.response_text,
            chosen_option: draft.chosen_option,
            reasoning: draft.reasoning,
            omr_json: draft.omr_json,
            ocr_text: draft.ocr_text,
            ocr_conf: draft.ocr_conf,
            flags: draft.flags,
            image_crop_path: draft.image_crop_path,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, filter: &AnswerFilter) -> bool {
        matches_opt(filter.submission_id.as_ref(), &self.submission_id)
            && matches_opt(filter.question_id.as_ref(), &self.question_id)
    }
}
