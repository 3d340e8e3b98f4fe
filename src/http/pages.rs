// ============================================================================
// HTML Pages
// Server-rendered pages for both services
// ============================================================================

use crate::calculator::{Calculation, Operation};
use crate::domain::Student;
use std::fmt::Write;

// ── Student pages ─────────────────────────────────────────────────────────────

/// Landing page of the student service.
pub(super) const STUDENT_HOME_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Student API</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 40px; color: #222; }
    a { color: #2a5db0; }
    code { background: #f2f2f2; padding: 2px 4px; border-radius: 4px; }
  </style>
</head>
<body>
  <h1>Student API</h1>
  <p>A simple student management API with HTML pages.</p>
  <ul>
    <li><a href="/students/html">All students</a></li>
    <li>JSON API: <code>GET /students/</code>, <code>POST /students/</code>,
        <code>GET|PUT|DELETE /students/{id}</code></li>
  </ul>
</body>
</html>
"#;

/// Table of every student in insertion order.
pub(super) fn student_list(students: &[Student]) -> String {
    let mut rows = String::new();
    for student in students {
        let _ = write!(
            rows,
            "\n      <tr><td>{id}</td><td><a href=\"/students/html/{id}\">{name}</a></td><td>{age}</td><td>{grade}</td></tr>",
            id = student.id,
            name = escape(&student.name),
            age = student.age,
            grade = escape(&student.grade),
        );
    }
    if students.is_empty() {
        rows.push_str("\n      <tr><td colspan=\"4\">No students yet.</td></tr>");
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Students</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 40px; color: #222; }}
    table {{ border-collapse: collapse; }}
    th, td {{ border: 1px solid #ccc; padding: 6px 12px; text-align: left; }}
  </style>
</head>
<body>
  <h1>Students</h1>
  <table>
    <thead>
      <tr><th>ID</th><th>Name</th><th>Age</th><th>Grade</th></tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
  <p><a href="/">Home</a></p>
</body>
</html>
"#
    )
}

/// Detail page for a single student.
pub(super) fn student_detail(student: &Student) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Student {id}</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 40px; color: #222; }}
    dt {{ font-weight: bold; }}
  </style>
</head>
<body>
  <h1>{name}</h1>
  <dl>
    <dt>ID</dt><dd>{id}</dd>
    <dt>Age</dt><dd>{age}</dd>
    <dt>Grade</dt><dd>{grade}</dd>
  </dl>
  <p><a href="/students/html">Back to all students</a></p>
</body>
</html>
"#,
        id = student.id,
        name = escape(&student.name),
        age = student.age,
        grade = escape(&student.grade),
    )
}

// ── Calculator pages ──────────────────────────────────────────────────────────

/// Calculator form. Submits to `/calc_ui` with fields `a`, `op`, `b`.
pub(super) fn calculator_home() -> String {
    let mut options = String::new();
    for op in Operation::ALL {
        let _ = write!(
            options,
            "\n          <option value=\"{}\">{}</option>",
            op.tag(),
            op.symbol()
        );
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Calculator</title>
  <link rel="stylesheet" href="/static/calculator.css" />
</head>
<body>
  <div class="container">
    <h1>🧮 Calculator</h1>
    <form action="/calc_ui" method="get">
      <input type="text" inputmode="decimal" name="a" placeholder="Enter number A" required>
      <select name="op">{options}
      </select>
      <input type="text" inputmode="decimal" name="b" placeholder="Enter number B">
      <br>
      <button type="submit">Calculate</button>
    </form>
  </div>
</body>
</html>
"#
    )
}

/// Result page showing the rendered expression.
pub(super) fn calculation_result(calc: &Calculation) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Result</title>
  <link rel="stylesheet" href="/static/calculator.css" />
</head>
<body>
  <div class="container">
    <h2>Result</h2>
    <h3>{expression}</h3>
    <a href="/">Back</a>
  </div>
</body>
</html>
"#,
        expression = escape(&calc.expression()),
    )
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Escape text for inclusion in HTML element content or attribute values.
pub(super) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Tests ────────────────────────────────────────────────────────────────────
