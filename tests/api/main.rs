mod carriers;
mod formatting;
mod startup;
