//! The records the catalog is seeded with at process start.

use super::{Author, AuthorId, Book};

pub fn authors() -> Vec<Author> {
	vec![
		author(1, "Marijn", "Haverbeke"),
		author(2, "Nicolás", "Bevacqua"),
		author(3, "Nicholas C.", "Zakas"),
	]
}

pub fn books() -> Vec<Book> {
	vec![
		Book {
			title: "Eloquent JavaScript, Third Edition".to_owned(),
			subtitle: Some("A Modern Introduction to Programming".to_owned()),
			author: AuthorId(1),
			isbn: "9781593279509".to_owned(),
			year: Some(2018),
			pages: Some(472),
			description: Some(
				"JavaScript lies at the heart of almost every modern web application, from social \
				 apps like Twitter to browser-based game frameworks like Phaser and Babylon. Though \
				 simple for beginners to pick up and play with, JavaScript is a flexible, complex \
				 language that you can use to build full-scale applications."
					.to_owned(),
			),
		},
		Book {
			title: "Practical Modern JavaScript".to_owned(),
			subtitle: Some("Dive into ES6 and the Future of JavaScript".to_owned()),
			author: AuthorId(2),
			isbn: "9781491943533".to_owned(),
			year: Some(2017),
			pages: Some(334),
			description: Some(
				"To get the most out of modern JavaScript, you need learn the latest features of \
				 its parent specification, ECMAScript 6 (ES6). This book provides a highly practical \
				 look at ES6, without getting lost in the specification or its implementation \
				 details."
					.to_owned(),
			),
		},
		Book {
			title: "Understanding ECMAScript 6".to_owned(),
			subtitle: Some("The Definitive Guide for JavaScript Developers".to_owned()),
			author: AuthorId(3),
			isbn: "9781593277574".to_owned(),
			year: Some(2016),
			pages: Some(352),
			description: Some(
				"ECMAScript 6 represents the biggest update to the core of JavaScript in the \
				 history of the language. In Understanding ECMAScript 6, expert developer Nicholas \
				 C. Zakas provides a complete guide to the object types, syntax, and other exciting \
				 changes that ECMAScript 6 brings to JavaScript."
					.to_owned(),
			),
		},
	]
}

fn author(id: u64, first: &str, last: &str) -> Author {
	Author {
		id: AuthorId(id),
		first_name: Some(first.to_owned()),
		last_name: last.to_owned(),
	}
}
