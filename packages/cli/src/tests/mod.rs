// ABOUTME: Test module wiring for the Farmlink server crate
// ABOUTME: Groups config, health, and full-router tests
