//! Minimal server-rendered pages. The full template/static-asset layer is
//! out of scope; these keep the HTML routes functional.

use crate::model::menu::MenuItem;
use crate::model::order::Order;
use crate::model::user::User;

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{} - College Canteen</title></head>\n<body>{}</body></html>",
        escape(title),
        body
    )
}

pub fn login_page(error: Option<&str>, success: Option<&str>) -> String {
    let mut body = String::from("<h1>College Canteen</h1>");
    if let Some(error) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>", escape(error)));
    }
    if let Some(success) = success {
        body.push_str(&format!("<p class=\"success\">{}</p>", escape(success)));
    }
    body.push_str(concat!(
        "<form method=\"post\" action=\"/login\">",
        "<input name=\"username\" placeholder=\"Username\">",
        "<input name=\"password\" type=\"password\" placeholder=\"Password\">",
        "<button type=\"submit\">Login</button></form>",
        "<form method=\"post\" action=\"/register\">",
        "<input name=\"username\" placeholder=\"Username\">",
        "<input name=\"password\" type=\"password\" placeholder=\"Password\">",
        "<input name=\"email\" placeholder=\"Email\">",
        "<button type=\"submit\">Register</button></form>",
    ));
    page("Login", &body)
}

pub fn menu_page(user: &User, menu: &[(String, Vec<MenuItem>)]) -> String {
    let mut body = format!(
        "<h1>Menu</h1><p>Welcome, {}</p><form id=\"orderForm\">",
        escape(&user.username)
    );
    for (category, items) in menu {
        body.push_str(&format!("<h2>{}</h2><ul>", escape(category)));
        for item in items {
            body.push_str(&format!(
                "<li data-item-id=\"{id}\">{name} - ₹{price} \
                 <input type=\"number\" name=\"items[{id}]\" value=\"0\" min=\"0\"></li>",
                id = item.id,
                name = escape(&item.name),
                price = item.price,
            ));
        }
        body.push_str("</ul>");
    }
    body.push_str(concat!(
        "<button type=\"submit\">Place Order</button></form>",
        "<p><a href=\"/my-orders\">My Orders</a> <a href=\"/logout\">Logout</a></p>",
    ));
    page("Menu", &body)
}

fn order_rows(orders: &[Order], with_user: bool) -> String {
    let mut rows = String::new();
    for order in orders {
        let items = order
            .items
            .iter()
            .map(|l| format!("{} x{}", escape(&l.name), l.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        let user_cell = if with_user {
            format!("<td>{}</td>", escape(&order.username))
        } else {
            String::new()
        };
        rows.push_str(&format!(
            "<tr data-order-id=\"{}\"><td>{}</td>{}<td>{}</td><td>₹{}</td><td>{}</td></tr>",
            order.id,
            order.id,
            user_cell,
            items,
            order.total_amount,
            escape(&order.status),
        ));
    }
    rows
}

pub fn my_orders_page(user: &User, orders: &[Order]) -> String {
    let body = format!(
        "<h1>My Orders</h1><p>{}</p><table>\
         <tr><th>Order</th><th>Items</th><th>Total</th><th>Status</th></tr>{}</table>\
         <p><a href=\"/menu\">Menu</a> <a href=\"/logout\">Logout</a></p>",
        escape(&user.username),
        order_rows(orders, false),
    );
    page("My Orders", &body)
}

pub fn admin_page(user: &User, orders: &[Order]) -> String {
    let body = format!(
        "<h1>Admin Dashboard</h1><p>{}</p><table>\
         <tr><th>Order</th><th>User</th><th>Items</th><th>Total</th><th>Status</th></tr>{}</table>\
         <p><a href=\"/logout\">Logout</a></p>",
        escape(&user.username),
        order_rows(orders, true),
    );
    page("Admin", &body)
}
