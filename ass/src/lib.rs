/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Processes Advanced SubStation Alpha (ASS) subtitle scripts.
//!
//! An ASS script is a plain text file made of bracketed sections. The [`script`] module splits
//! a script into those sections and puts them back together. The [`events`] module understands
//! the `[Events]` section, where every dialogue line lives, and can shift all of its timing at
//! once. The [`timestamp`] module handles the `H:MM:SS.CC` timestamps those events carry.

pub mod events;
pub mod script;
pub mod timestamp;
