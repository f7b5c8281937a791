//! Combines the four per-test scores into an interview-readiness verdict.

use serde::{Deserialize, Serialize};

use crate::report::round2;

const RESUME_WEIGHT: f64 = 0.2;
const TEXT_WEIGHT: f64 = 0.25;
const VOICE_WEIGHT: f64 = 0.25;
const VIDEO_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionScores {
    pub resume_score: f64,
    pub text_score: f64,
    pub voice_score: f64,
    pub video_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessStatus {
    Pass,
    Pending,
    Fail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    pub scores: SessionScores,
    pub overall_score: f64,
    pub status: ReadinessStatus,
    pub status_message: String,
    pub feedback: String,
    pub recommendations: Vec<String>,
}

pub fn assess(scores: &SessionScores) -> ReadinessReport {
    let overall = scores.resume_score * RESUME_WEIGHT
        + scores.text_score * TEXT_WEIGHT
        + scores.voice_score * VOICE_WEIGHT
        + scores.video_score * VIDEO_WEIGHT;

    let (status, status_message, picks): (ReadinessStatus, &str, &[&str]) = if overall >= 70.0 {
        (
            ReadinessStatus::Pass,
            "Congratulations! You are ready for real interviews.",
            &[
                "Practice with different interviewers",
                "Research company-specific questions",
                "Prepare questions to ask the interviewer",
            ],
        )
    } else if overall >= 50.0 {
        (
            ReadinessStatus::Pending,
            "Good progress! You need more practice.",
            &[
                "Focus on your weakest area",
                "Practice daily for 30 minutes",
                "Record and review your practice sessions",
            ],
        )
    } else {
        (
            ReadinessStatus::Fail,
            "Needs significant improvement. Keep practicing!",
            &[
                "Start with basic interview questions",
                "Work on confidence and communication",
                "Seek feedback from mentors",
                "Practice in front of a mirror",
            ],
        )
    };

    ReadinessReport {
        scores: scores.clone(),
        overall_score: round2(overall),
        status,
        status_message: status_message.to_string(),
        feedback: detailed_feedback(scores),
        recommendations: picks.iter().map(|s| s.to_string()).collect(),
    }
}

fn detailed_feedback(scores: &SessionScores) -> String {
    let mut sections: Vec<&str> = Vec::with_capacity(4);

    sections.push(if scores.resume_score >= 80.0 {
        "Resume: Excellent! Your resume is well-structured and highlights key skills."
    } else if scores.resume_score >= 60.0 {
        "Resume: Good. Consider adding more quantifiable achievements."
    } else {
        "Resume: Needs improvement. Focus on formatting and content clarity."
    });

    sections.push(if scores.text_score >= 80.0 {
        "Written Communication: Excellent grammar and clarity in written responses."
    } else if scores.text_score >= 60.0 {
        "Written Communication: Good. Work on vocabulary and sentence structure."
    } else {
        "Written Communication: Needs practice. Focus on grammar and organization."
    });

    sections.push(if scores.voice_score >= 80.0 {
        "Verbal Communication: Clear, confident speech with good fluency."
    } else if scores.voice_score >= 60.0 {
        "Verbal Communication: Good. Work on pace and pronunciation."
    } else {
        "Verbal Communication: Needs significant improvement in clarity and confidence."
    });

    sections.push(if scores.video_score >= 80.0 {
        "Presentation Skills: Excellent body language, eye contact, and professionalism."
    } else if scores.video_score >= 60.0 {
        "Presentation Skills: Good. Improve eye contact and posture."
    } else {
        "Presentation Skills: Focus on body language, eye contact, and professional presence."
    });

    sections.join("\n\n")
}
