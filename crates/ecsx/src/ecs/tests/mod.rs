//! Integration tests for ECS workflows: worlds, systems and queries together

mod scenarios;
