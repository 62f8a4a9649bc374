//! Synthetic statement fixtures.
//!
//! Text renditions of the generated sample statements, matching what the
//! text renderer produces for the corresponding PDFs (table rows flatten
//! to space-separated lines). Fixture values — holder, card digits,
//! period, amounts — live only here and in tests; production strategies
//! never fall back to them.

use crate::models::statement::Bank;

/// Synthetic HDFC Bank statement.
pub const HDFC: &str = "\
HDFC BANK CREDIT CARD STATEMENT

Card Member Name: RAJESH KUMAR Statement Date: 25-Nov-2024
Card Number: XXXX XXXX XXXX 5678 Customer ID: HDFC78901234
Credit Limit: ₹2,50,000.00 Available Limit: ₹1,87,432.00

BILLING SUMMARY
Description Amount (₹)
Previous Balance 45,678.00
Payments/Credits -25,000.00
Purchases/Debits 18,754.00
Total Amount Due 39,432.00
Minimum Amount Due 2,000.00

TRANSACTION DETAILS
Date Description Amount (₹)
15-Nov-2024 AMAZON RETAIL INDIA 8,456.00
18-Nov-2024 SWIGGY BANGALORE 1,234.00
20-Nov-2024 PETROL PUMP DELHI 2,500.00
22-Nov-2024 FLIPKART INTERNET 4,321.00
24-Nov-2024 BIG BASKET GROCERIES 2,243.00

IMPORTANT DATES
Statement Period: 01-Nov-2024 to 30-Nov-2024
Payment Due Date: 15-Dec-2024
Late Payment Fee: ₹500 + GST

This is a sample HDFC Bank credit card statement for testing purposes only
";

/// Synthetic ICICI Bank statement.
pub const ICICI: &str = "\
ICICI BANK CREDIT CARD STATEMENT

Dear RAJESH KUMAR, Statement Date: 25-Nov-2024
Card No: XXXX-XXXX-XXXX-4321 Credit Limit: ₹3,00,000 Due Date: 15-Dec-2024

AMOUNT SUMMARY
Total Amount Due ₹38,765.00
Minimum Amount Due ₹3,876.00
Reward Points Balance 12,345 Pts

TRANSACTION DETAILS
Date Transaction Description Amount (₹)
14-Nov-2024 MYNTRA FASHION ONLINE 5,678.00
16-Nov-2024 ZOMATO FOOD DELIVERY 1,890.00
19-Nov-2024 BOOKMYSHOW TICKETS 2,345.00
21-Nov-2024 APPLE STORE ONLINE 12,500.00
23-Nov-2024 UBER RIDES BANGALORE 856.00

BILLING INFORMATION
Bill Period: 01-Nov-2024 to 30-Nov-2024
Payment Due Date: 15-Dec-2024
Late Payment Charges: ₹600 + applicable taxes
";

/// Synthetic SBI Card statement.
pub const SBI: &str = "\
SBI CARD CREDIT CARD STATEMENT

Customer Name: RAJESH KUMAR Card No: XXXX XXXX XXXX 1234
Statement Date: 25-Nov-2024 Credit Limit: ₹2,00,000
Customer ID: SBI789456123 Due Date: 15-Dec-2024

STATEMENT SUMMARY
Opening Balance ₹42,150.00
Total Purchases ₹21,845.00
Payments Received ₹-25,000.00
Total Amount Due ₹38,995.00
Minimum Amount Due ₹3,899.00

TRANSACTION DETAILS
Date Description Amount (₹)
13-Nov-2024 AMAZON ONLINE RETAIL 7,890.00
17-Nov-2024 BIG BASKET GROCERIES 3,456.00
20-Nov-2024 INOX MOVIE TICKETS 1,234.00
22-Nov-2024 APPLE MUSIC SUBSCRIPTION 99.00
24-Nov-2024 DECATHLON SPORTS 6,166.00

PAYMENT INFORMATION
Statement Period: 01-Nov-2024 to 30-Nov-2024
Payment Due Date: 15-Dec-2024
Late Payment Charges: ₹450 + GST
";

/// Synthetic Axis Bank statement.
pub const AXIS: &str = "\
AXIS BANK CREDIT CARD STATEMENT

Card Member: RAJESH KUMAR Card Number: XXXX XXXX XXXX 8765
Statement Date: 25-Nov-2024 Credit Limit: ₹3,50,000
Customer ID: AXIS456789 Available Credit: ₹2,89,123

ACCOUNT SUMMARY
Previous Balance ₹38,765.00
Current Purchases ₹22,358.00
Payments & Credits ₹-20,000.00
Total Amount Due ₹41,123.00
Minimum Amount Due ₹4,112.00

TRANSACTION DETAILS
Date Merchant/Description Amount (₹)
12-Nov-2024 FLIPKART ONLINE SHOPPING 9,876.00
15-Nov-2024 SWIGGY FOOD DELIVERY 2,345.00
18-Nov-2024 INDIANOIL PETROL PUMP 3,500.00
21-Nov-2024 MYNTRA FASHION STORE 4,567.00
23-Nov-2024 NETFLIX SUBSCRIPTION 799.00

PAYMENT DETAILS
Billing Cycle: 01-Nov-2024 to 30-Nov-2024
Payment Due Date: 15-Dec-2024
Late Payment Fee: ₹550 + applicable taxes
";

/// Synthetic Citibank statement.
pub const CITI: &str = "\
CITIBANK CREDIT CARD STATEMENT

Account Holder: RAJESH KUMAR Card Number: XXXX XXXX XXXX 2468
Statement Date: 25-Nov-2024 Credit Limit: ₹4,00,000
Account Number: CITI123456789 Reward Points: 15,678

STATEMENT SUMMARY
Previous Statement Balance ₹35,678.00
Payments & Credits ₹-30,000.00
New Purchases & Charges ₹25,567.00
Total Amount Due ₹31,245.00
Minimum Payment Due ₹3,124.00

TRANSACTION DETAILS
Date Transaction Description Amount (₹)
11-Nov-2024 AMAZON PRIME VIDEO 1,499.00
14-Nov-2024 BLOOMINGDALE SHOPPING 8,765.00
17-Nov-2024 UBER EATS FOOD DELIVERY 1,890.00
19-Nov-2024 APPLE STORE PURCHASE 10,899.00
22-Nov-2024 BOOKMYSHOW ENTERTAINMENT 2,514.00

PAYMENT INFORMATION
Statement Period: 01-Nov-2024 to 30-Nov-2024
Payment Due Date: 15-Dec-2024
Late Payment Charges: ₹700 + GST
";

/// Synthetic statement text for the given issuer.
pub fn statement_for(bank: Bank) -> &'static str {
    match bank {
        Bank::Hdfc => HDFC,
        Bank::Icici => ICICI,
        Bank::Sbi => SBI,
        Bank::Axis => AXIS,
        Bank::Citi => CITI,
    }
}
