//! Server-rendered pages for the two back-office workflows.

const STYLE: &str = "\
body { background: #181818; color: #fff; font-family: Arial, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }\n\
h1 { color: #e60000; }\n\
h2 { color: #c299ff; }\n\
form { margin: 1.5rem 0; padding: 1rem; background: #222; border-radius: 5px; }\n\
label { display: block; color: #e60000; margin-top: 0.5rem; }\n\
input { background: #333; color: #fff; border: 1px solid #c299ff; border-radius: 5px; padding: 5px; }\n\
button { background: #c299ff; color: #fff; font-weight: bold; border: none; border-radius: 5px; padding: 0.5rem 1rem; margin-top: 1rem; }\n\
.success { background: #143d14; border-radius: 5px; padding: 1rem; }\n\
.error { background: #3d1414; border-radius: 5px; padding: 1rem; }\n\
a { color: #c299ff; }";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Claims Desk</h1>\n{body}\n</body>\n</html>"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn index_page() -> String {
    page(
        "Claims Desk",
        "<h2>Daily resolution target</h2>\n\
         <form method=\"post\" action=\"/calculator\">\n\
         <label for=\"daily_inflow\">New claims per day</label>\n\
         <input id=\"daily_inflow\" name=\"daily_inflow\" type=\"number\" min=\"0\" step=\"any\" value=\"10\" required>\n\
         <label for=\"pending_backlog\">Pending claims today</label>\n\
         <input id=\"pending_backlog\" name=\"pending_backlog\" type=\"number\" min=\"0\" step=\"any\" value=\"50\" required>\n\
         <label for=\"target_months\">Months to clear the backlog</label>\n\
         <input id=\"target_months\" name=\"target_months\" type=\"number\" min=\"0.1\" step=\"any\" value=\"6\" required>\n\
         <button type=\"submit\">Compute target</button>\n\
         </form>\n\
         <h2>Merge reports</h2>\n\
         <form method=\"post\" action=\"/merge\" enctype=\"multipart/form-data\">\n\
         <label for=\"report\">Reports (.csv or .xlsx, same columns)</label>\n\
         <input id=\"report\" name=\"report\" type=\"file\" accept=\".csv,.xlsx\" multiple required>\n\
         <label for=\"allowed_insurers\">Allowed insurers (optional, comma-separated)</label>\n\
         <input id=\"allowed_insurers\" name=\"allowed_insurers\" type=\"text\" placeholder=\"Acme, Zeta\">\n\
         <button type=\"submit\">Merge and download</button>\n\
         </form>",
    )
}

pub fn calculator_result_page(target_months: f64, daily_target: f64) -> String {
    let banner = format!(
        "<div class=\"success\">To clear the pending backlog in {target_months} months you \
         need to resolve, on average, <strong>{daily_target:.2}</strong> claims per day.</div>\n\
         <p><a href=\"/\">Back</a></p>"
    );
    page("Daily resolution target", &banner)
}

pub fn error_page(message: &str) -> String {
    let banner = format!(
        "<div class=\"error\">{}</div>\n<p><a href=\"/\">Back</a></p>",
        escape(message)
    );
    page("Claims Desk — error", &banner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_escapes_markup() {
        let html = error_page("columns [\"<script>\"] rejected");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn result_page_rounds_to_two_decimals() {
        let html = calculator_result_page(6.0, 1850.0 / 180.0);
        assert!(html.contains("10.28"));
    }
}
