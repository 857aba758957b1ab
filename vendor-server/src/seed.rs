//! 演示数据
//!
//! 首次启动时写入的订单、菜品、账单、资料与客服欢迎语。
//! 订单仅在存储为空时写入；其余数据每次启动加载到内存。

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::models::{
    BankDetails, BusinessHours, Customer, DayHours, Dish, DishCategory, EarningsSummary, FaqEntry,
    Order, OrderItem, OrderStatus, SupportContact, Transaction, TransactionStatus, VendorProfile,
    Weekday,
};

fn time(value: &str) -> NaiveDateTime {
    value.parse().unwrap_or_default()
}

fn date(value: &str) -> NaiveDate {
    value.parse().unwrap_or_default()
}

fn customer(name: &str, phone: &str) -> Customer {
    Customer {
        name: name.to_string(),
        phone: phone.to_string(),
    }
}

fn item(name: &str, quantity: u32, price: i64) -> OrderItem {
    OrderItem::new(name, quantity, Decimal::from(price))
}

// ========== Orders ==========

/// Orders on the live board
pub fn live_orders() -> Vec<Order> {
    vec![
        Order::new(
            "ORD2023001",
            customer("Rahul Sharma", "+91 9876543210"),
            vec![item("Butter Chicken", 1, 250), item("Naan", 2, 30)],
            OrderStatus::Pending,
            time("2023-06-15T12:30:00"),
        )
        .with_special_instructions("Less spicy please"),
        Order::new(
            "ORD2023002",
            customer("Priya Patel", "+91 9876543211"),
            vec![item("Paneer Tikka", 1, 200), item("Roti", 3, 15)],
            OrderStatus::Accepted,
            time("2023-06-15T12:15:00"),
        ),
        Order::new(
            "ORD2023003",
            customer("Amit Kumar", "+91 9876543212"),
            vec![item("Masala Dosa", 2, 120)],
            OrderStatus::Completed,
            time("2023-06-15T11:30:00"),
        ),
        Order::new(
            "ORD2023004",
            customer("Sneha Gupta", "+91 9876543213"),
            vec![item("Samosa", 4, 30), item("Chai", 2, 20)],
            OrderStatus::Rejected,
            time("2023-06-15T11:00:00"),
        )
        .with_special_instructions("Extra chutney"),
    ]
}

/// Past orders shown on the history page
pub fn archived_orders() -> Vec<Order> {
    vec![
        Order::new(
            "ORD001",
            customer("Amit Sharma", "9876543210"),
            vec![item("Paneer Butter Masala", 1, 180), item("Butter Naan", 2, 30)],
            OrderStatus::Completed,
            time("2023-06-15T10:30:00"),
        )
        .with_delivery("123, ABC Colony, Sector 15, Gurgaon", "Online Payment"),
        Order::new(
            "ORD002",
            customer("Priya Patel", "9876543211"),
            vec![item("Veg Biryani", 1, 150), item("Raita", 1, 30)],
            OrderStatus::Completed,
            time("2023-06-14T13:45:00"),
        )
        .with_delivery("456, XYZ Society, Sector 10, Gurgaon", "Cash on Delivery")
        .with_special_instructions("Less spicy please"),
        Order::new(
            "ORD003",
            customer("Rahul Gupta", "9876543212"),
            vec![item("Chole Bhature", 2, 120)],
            OrderStatus::Rejected,
            time("2023-06-13T19:15:00"),
        )
        .with_delivery("789, PQR Apartments, Sector 22, Gurgaon", "Online Payment"),
        Order::new(
            "ORD004",
            customer("Neha Singh", "9876543213"),
            vec![item("Dal Makhani", 1, 140), item("Jeera Rice", 1, 90)],
            OrderStatus::Completed,
            time("2023-06-12T12:30:00"),
        )
        .with_delivery("101, LMN Heights, Sector 30, Gurgaon", "Online Payment"),
        Order::new(
            "ORD005",
            customer("Vikram Malhotra", "9876543214"),
            vec![item("Masala Dosa", 2, 100), item("Filter Coffee", 2, 40)],
            OrderStatus::Cancelled,
            time("2023-06-11T08:45:00"),
        )
        .with_delivery("202, EFG Residency, Sector 45, Gurgaon", "Cash on Delivery"),
    ]
}

// ========== Menu ==========

pub fn dishes() -> Vec<Dish> {
    let dish = |id: &str, name: &str, category, price: i64, is_available| Dish {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price: Decimal::from(price),
        description: String::new(),
        image: None,
        is_available,
    };
    vec![
        dish("1", "Butter Chicken", DishCategory::Lunch, 250, true),
        dish("2", "Paneer Tikka", DishCategory::Dinner, 200, true),
        dish("3", "Masala Dosa", DishCategory::Breakfast, 120, false),
        dish("4", "Samosa", DishCategory::Snacks, 30, true),
    ]
}

// ========== Earnings ==========

pub fn earnings_summary() -> EarningsSummary {
    EarningsSummary {
        today: Decimal::from(2450),
        weekly: Decimal::from(15680),
        monthly: Decimal::from(62400),
        pending_payout: Decimal::from(12540),
        commission: Decimal::from(1880),
    }
}

pub fn transactions() -> Vec<Transaction> {
    let trx = |id: &str, day: &str, amount: i64, orders, status| Transaction {
        id: id.to_string(),
        date: date(day),
        amount: Decimal::from(amount),
        orders,
        status,
    };
    vec![
        trx("TRX001", "2023-06-15", 2450, 12, TransactionStatus::Pending),
        trx("TRX002", "2023-06-14", 3200, 15, TransactionStatus::Pending),
        trx("TRX003", "2023-06-13", 2800, 14, TransactionStatus::Pending),
        trx("TRX004", "2023-06-12", 2100, 10, TransactionStatus::Completed),
        trx("TRX005", "2023-06-11", 2600, 13, TransactionStatus::Completed),
    ]
}

// ========== Profile ==========

pub fn vendor_profile() -> VendorProfile {
    let business_hours: BusinessHours = Weekday::ALL
        .into_iter()
        .map(|day| {
            let hours = match day {
                Weekday::Saturday | Weekday::Sunday => DayHours::open("10:00", "22:00"),
                _ => DayHours::open("09:00", "21:00"),
            };
            (day, hours)
        })
        .collect();

    VendorProfile {
        name: "Rajesh Kumar".to_string(),
        email: "rajesh@example.com".to_string(),
        phone: "9876543210".to_string(),
        kitchen_name: "Rajesh's Kitchen".to_string(),
        cuisine_type: "North Indian, Punjabi".to_string(),
        address: "123, ABC Colony, Sector 15, Gurgaon, Haryana - 122001".to_string(),
        fssai_number: "12345678901234".to_string(),
        business_hours,
        bank_details: BankDetails {
            account_number: "1234567890".to_string(),
            ifsc_code: "HDFC0001234".to_string(),
            account_name: "Rajesh Kumar".to_string(),
            bank_name: "HDFC Bank".to_string(),
        },
    }
}

// ========== Support ==========

pub const WELCOME_MESSAGE: &str = "Hello! Welcome to Dabbzo Support. How can we help you today?";

pub fn faq() -> Vec<FaqEntry> {
    [
        (
            "How do I update my menu?",
            "You can update your menu from the Menu section. Click on \"Add Dish\" to add new items or edit existing ones.",
        ),
        (
            "When will I receive my payments?",
            "Payments are processed every Monday for the previous week's orders. It takes 1-2 business days for the amount to reflect in your bank account.",
        ),
        (
            "How do I handle customer complaints?",
            "Customer complaints are handled by our customer support team. However, you will be notified about any issues and may be asked to provide your input.",
        ),
        (
            "How can I update my business hours?",
            "You can update your business hours from your Profile section. Changes will be reflected immediately on the customer app.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

pub fn support_contact() -> SupportContact {
    SupportContact {
        email: "vendors@dabbzo.com".to_string(),
        phone: "1800-XXX-XXXX (Toll Free)".to_string(),
        hours: "9 AM to 9 PM, 7 days a week".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_totals_match_items() {
        let totals: Vec<Decimal> = live_orders().iter().map(|o| o.total).collect();
        assert_eq!(
            totals,
            vec![
                Decimal::from(310),
                Decimal::from(245),
                Decimal::from(240),
                Decimal::from(160)
            ]
        );
        let archived: Vec<Decimal> = archived_orders().iter().map(|o| o.total).collect();
        assert_eq!(archived[4], Decimal::from(280));
    }

    #[test]
    fn test_times_parse() {
        assert!(live_orders().iter().all(|o| o.order_time != NaiveDateTime::default()));
        assert!(transactions().iter().all(|t| t.date != NaiveDate::default()));
    }

    #[test]
    fn test_profile_is_valid() {
        vendor_profile().validate().unwrap();
    }
}
