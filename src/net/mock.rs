//! Built-in canned responses used whenever the session is in mock mode.
//!
//! A pure keyword lookup over the latest user message: no network and no
//! failure path. The reply is always non-empty.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::state::conversation::{ChatMessage, Role};

/// Keyword → canned answer, checked in order against the lowercased query.
const RESPONSES: &[(&str, &str)] = &[
    (
        "python",
        "Jason has extensive experience with Python, particularly in developing AI/ML \
applications and backend services. He's worked with Python for building RESTful APIs, \
implementing machine learning models, and creating scalable AI infrastructure.",
    ),
    (
        "fastapi",
        "Jason has built robust backend services and RESTful APIs using FastAPI, \
particularly in his work on AI-driven anomaly detection systems and enterprise AI \
quality assurance tools.",
    ),
    (
        "react",
        "Jason has developed modern frontend dashboards using React and Next.js, \
integrating them with AI-powered backend services for real-time monitoring and \
visualization.",
    ),
    (
        "docker",
        "Jason has extensive experience with Docker containerization, particularly in \
building and maintaining scalable AI infrastructure on multi-GPU clusters.",
    ),
    (
        "llm",
        "Jason has led the development of in-house AI solutions using open-source LLMs, \
implementing custom fine-tuning pipelines and internal model hosting infrastructure for \
enterprise-wide deployment.",
    ),
    (
        "gpu",
        "Jason has worked extensively with multi-GPU clusters and high-performance NVIDIA \
workstations, implementing parallel model training and inference systems.",
    ),
    (
        "nginx",
        "Jason has implemented NGINX for high-performance reverse proxy configurations, \
load balancing, and SSL termination in production environments.",
    ),
];

const DEFAULT_RESPONSE: &str = "Jason is a Software Engineer III with expertise in AI/ML, \
backend development, and cloud-native architectures. He has experience working with various \
technologies and frameworks in production environments.";

const NO_QUESTION_RESPONSE: &str = "I didn't receive a question. How can I help you?";

/// Produce a canned reply for the latest user message in `history`.
pub fn reply(history: &[ChatMessage]) -> String {
    let Some(query) = history
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.to_lowercase())
    else {
        return NO_QUESTION_RESPONSE.to_owned();
    };

    for (keyword, response) in RESPONSES {
        if query.contains(keyword) {
            return (*response).to_owned();
        }
    }

    DEFAULT_RESPONSE.to_owned()
}
