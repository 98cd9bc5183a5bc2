//! Placeholder target for the workspace-root tooling package (pre-commit hooks).
