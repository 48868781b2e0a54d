//! HTML rendering.
//!
//! Every page is rendered through [`render`], which wraps the page body in
//! the shared layout. The layout takes the header previews as a parameter;
//! when there are none the header is rendered without images.
//!
//! Markup goes through `quick-xml`'s writer, so element text and attribute
//! values are escaped as they are written.

use std::io::{self, Cursor};

use campus_core::resolve::AttributeBag;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::header::HeaderPreviews;

/// The site name shown in the header and in every `<title>`.
pub const SITE_NAME: &str = "Campus Atlas";

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'.')
  .remove(b'_')
  .remove(b'~');

/// The body of a page, before it is wrapped in the layout.
#[derive(Debug, Clone)]
pub enum Page {
  Home,
  About,
  /// Alphabetical list of main titles.
  Index(Vec<String>),
  University(AttributeBag),
  Error {
    code:        u16,
    reason:      &'static str,
    description: &'static str,
  },
}

impl Page {
  fn title(&self) -> String {
    match self {
      Page::Home => SITE_NAME.to_owned(),
      Page::About => format!("About · {SITE_NAME}"),
      Page::Index(_) => format!("Universities · {SITE_NAME}"),
      Page::University(bag) => format!("{} · {SITE_NAME}", bag.university),
      Page::Error { code, reason, .. } => format!("{code} {reason} · {SITE_NAME}"),
    }
  }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// Render `page` inside the site layout.
pub fn render(page: &Page, previews: Option<&HeaderPreviews>) -> io::Result<String> {
  let mut w = Writer::new(Cursor::new(Vec::new()));

  w.write_event(Event::DocType(BytesText::new("html")))?;
  write_start_with_attr(&mut w, "html", &[("lang", "ru")])?;
  write_start(&mut w, "head")?;
  write_empty_with_attr(&mut w, "meta", &[("charset", "utf-8")])?;
  write_text_elem(&mut w, "title", &page.title())?;
  write_end(&mut w, "head")?;

  write_start(&mut w, "body")?;
  write_header(&mut w, previews)?;
  write_start(&mut w, "main")?;
  write_body(&mut w, page)?;
  write_end(&mut w, "main")?;
  write_end(&mut w, "body")?;
  write_end(&mut w, "html")?;

  String::from_utf8(w.into_inner().into_inner())
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_header(
  w: &mut Writer<Cursor<Vec<u8>>>,
  previews: Option<&HeaderPreviews>,
) -> io::Result<()> {
  write_start(w, "header")?;
  write_link_with_attr(w, "/", SITE_NAME, &[("class", "brand")])?;

  write_start(w, "nav")?;
  write_link(w, "/universities", "Universities")?;
  write_link(w, "/random", "Surprise me")?;
  write_link(w, "/about", "About")?;
  write_end(w, "nav")?;

  write_start_with_attr(w, "form", &[("action", "/search"), ("method", "get")])?;
  write_empty_with_attr(w, "input", &[
    ("type", "search"),
    ("name", "q"),
    ("placeholder", "University name"),
  ])?;
  write_text_elem(w, "button", "Find")?;
  write_end(w, "form")?;

  if let Some(p) = previews {
    write_start_with_attr(w, "div", &[("class", "previews")])?;
    for (slot, src) in [("first", &p.first), ("second", &p.second), ("third", &p.third)] {
      write_empty_with_attr(w, "img", &[
        ("class", "preview"),
        ("id", slot),
        ("src", src.as_str()),
        ("alt", ""),
      ])?;
    }
    write_end(w, "div")?;
  }

  write_end(w, "header")
}

fn write_body(w: &mut Writer<Cursor<Vec<u8>>>, page: &Page) -> io::Result<()> {
  match page {
    Page::Home => {
      write_text_elem(w, "h1", "University buildings of the world")?;
      write_text_elem(
        w,
        "p",
        "Type a university name into the search box, browse the index, or let chance decide.",
      )
    }
    Page::About => {
      write_text_elem(w, "h1", "About")?;
      write_text_elem(
        w,
        "p",
        "A site for architecture lovers: photos and short notes on the buildings of universities around the world.",
      )
    }
    Page::Index(titles) => {
      write_text_elem(w, "h1", "Universities")?;
      write_start(w, "ul")?;
      for t in titles {
        write_start(w, "li")?;
        write_link(w, &format!("/{}", path_segment(t)), t)?;
        write_end(w, "li")?;
      }
      write_end(w, "ul")
    }
    Page::University(bag) => {
      write_text_elem(w, "h1", &bag.university)?;
      if !bag.about.is_empty() {
        write_text_elem(w, "p", &bag.about)?;
      }
      for src in &bag.photos {
        write_empty_with_attr(w, "img", &[
          ("class", "photo"),
          ("src", src.as_str()),
          ("alt", bag.university.as_str()),
        ])?;
      }
      if !bag.link_to_wikipedia.is_empty() {
        write_start(w, "p")?;
        write_link(w, &bag.link_to_wikipedia, "Wikipedia")?;
        write_end(w, "p")?;
      }
      Ok(())
    }
    Page::Error { code, reason, description } => {
      write_text_elem(w, "h1", &format!("{code} {reason}"))?;
      write_text_elem(w, "p", description)
    }
  }
}

/// Percent-encode a title for use as a single path segment.
fn path_segment(s: &str) -> String { utf8_percent_encode(s, PATH_SEGMENT).to_string() }

// ─── Writer helpers ──────────────────────────────────────────────────────────

fn write_start(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str) -> io::Result<()> {
  w.write_event(Event::Start(BytesStart::new(tag)))
}

fn write_start_with_attr(
  w: &mut Writer<Cursor<Vec<u8>>>,
  tag: &str,
  attrs: &[(&str, &str)],
) -> io::Result<()> {
  let mut el = BytesStart::new(tag);
  for (k, v) in attrs {
    el.push_attribute((*k, *v));
  }
  w.write_event(Event::Start(el))
}

fn write_end(w: &mut Writer<Cursor<Vec<u8>>>, tag: &str) -> io::Result<()> {
  w.write_event(Event::End(BytesEnd::new(tag)))
}

fn write_text_elem(
  w: &mut Writer<Cursor<Vec<u8>>>,
  tag: &str,
  text: &str,
) -> io::Result<()> {
  write_start(w, tag)?;
  w.write_event(Event::Text(BytesText::new(text)))?;
  write_end(w, tag)
}

/// Void elements (`img`, `meta`, `input`) are written self-closing.
fn write_empty_with_attr(
  w: &mut Writer<Cursor<Vec<u8>>>,
  tag: &str,
  attrs: &[(&str, &str)],
) -> io::Result<()> {
  let mut el = BytesStart::new(tag);
  for (k, v) in attrs {
    el.push_attribute((*k, *v));
  }
  w.write_event(Event::Empty(el))
}

fn write_link(w: &mut Writer<Cursor<Vec<u8>>>, href: &str, text: &str) -> io::Result<()> {
  write_link_with_attr(w, href, text, &[])
}

fn write_link_with_attr(
  w: &mut Writer<Cursor<Vec<u8>>>,
  href: &str,
  text: &str,
  attrs: &[(&str, &str)],
) -> io::Result<()> {
  let mut el = BytesStart::new("a");
  for (k, v) in attrs {
    el.push_attribute((*k, *v));
  }
  el.push_attribute(("href", href));
  w.write_event(Event::Start(el))?;
  w.write_event(Event::Text(BytesText::new(text)))?;
  write_end(w, "a")
}
