//! Price arithmetic and the breakdown shown to the user.

use std::fmt;

/// Item details collected by the conversation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDetails {
    /// CNY.
    pub price_cny: f64,
    /// kg.
    pub weight: f64,
    /// Local currency per kg.
    pub delivery_per_kg: f64,
}

/// Result of one calculation. Amounts other than `price_cny` are in local currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub price_cny: f64,
    pub rate: f64,
    pub price_local: f64,
    pub weight: f64,
    pub delivery_per_kg: f64,
    pub delivery_cost: f64,
    pub subtotal: f64,
    /// Percent.
    pub margin: f64,
    pub total: f64,
    pub profit: f64,
}

impl PriceBreakdown {
    pub fn compute(item: ItemDetails, rate: f64, margin: f64) -> Self {
        let price_local = item.price_cny * rate;
        let delivery_cost = item.weight * item.delivery_per_kg;
        let subtotal = price_local + delivery_cost;
        let total = subtotal * (1.0 + margin / 100.0);
        Self {
            price_cny: item.price_cny,
            rate,
            price_local,
            weight: item.weight,
            delivery_per_kg: item.delivery_per_kg,
            delivery_cost,
            subtotal,
            margin,
            total,
            profit: total - subtotal,
        }
    }
}

/// Amounts rounded to whole units, the rate to 2 decimals; price, weight and margin as entered.
impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "💰 Item price: {} ¥ × {:.2} ₽ = {:.0} ₽",
            self.price_cny, self.rate, self.price_local
        )?;
        writeln!(
            f,
            "🚚 Delivery: {} kg × {:.0} ₽ = {:.0} ₽",
            self.weight, self.delivery_per_kg, self.delivery_cost
        )?;
        writeln!(f, "💵 Total without margin: {:.0} ₽", self.subtotal)?;
        writeln!(f, "💸 With {}% margin: {:.0} ₽", self.margin, self.total)?;
        write!(f, "📈 Your profit: {:.0} ₽", self.profit)
    }
}
