/*
 * Copyright 2021 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_default_output_path_simple() {
    assert_eq!(
        default_output_path(Path::new("/videos/show.ass")),
        PathBuf::from("/videos/show.edited.ass"),
    );
}

#[test]
fn test_default_output_path_relative() {
    assert_eq!(default_output_path(Path::new("show.ass")), PathBuf::from("show.edited.ass"));
}

#[test]
fn test_default_output_path_dotted_name() {
    assert_eq!(
        default_output_path(Path::new("show.s01e02.ass")),
        PathBuf::from("show.s01e02.edited.ass"),
    );
}
