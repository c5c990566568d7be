// Copyright (C) 2025 The waddl developers.
//
// This file is part of waddl. waddl is free software: you can redistribute it
// and/or modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// waddl is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// waddl. If not, see [http://www.gnu.org/licenses](http://www.gnu.org/licenses).
/// `lib.rs` -- Define library modules for waddl
/// ============================================
///
/// Two engines sit behind the waddl editor: the [diagram] transformer, which
/// turns a parsed syntax tree into the nodes of a code diagram, and the
/// [classifier], which guesses the language of the text being edited.
pub mod classifier;
pub mod diagram;
/// Keeps the editor's highlighting in step with the classifier.
pub mod editor;
pub mod logging;
pub mod parse_result;
pub mod pretty_printer;
