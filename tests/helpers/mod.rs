#![allow(dead_code)]

pub mod audio_fixture;
pub mod stub_detectors;
pub mod vendor_server;
